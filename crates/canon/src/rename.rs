//! Rename command - prints the rewritten identifier

use crate::cli::RenameArgs;
use canon_csharp::{rewrite_casing, rewrite_pascal};

#[must_use]
pub fn rename(name: &str, pascal: bool) -> String {
    if pascal {
        rewrite_pascal(name)
    } else {
        rewrite_casing(name)
    }
}

pub fn run_rename(args: RenameArgs) -> anyhow::Result<()> {
    let renamed = rename(&args.name, args.pascal);
    if renamed == args.name {
        tracing::debug!("{} already follows the casing rules", args.name);
    }
    println!("{renamed}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_and_pascal() {
        assert_eq!(
            rename("FieldWithAcronymOfXMLToUpdate", false),
            "fieldWithAcronymOfXmlToUpdate"
        );
        assert_eq!(rename("HTTPClient", true), "HttpClient");
    }
}
