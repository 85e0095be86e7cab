//! Acronym-aware identifier casing used by rename fixes.

use crate::pattern::has_consecutive_uppercase;

/// Acronym replacements, applied in order. Longer tokens precede their
/// prefixes (`PPTX` before `PPT`, `TCPIP` before `TCP`, `DOCX` before `DOC`).
pub static ACRONYMS: &[(&str, &str)] = &[
    ("PPTX", "Pptx"),
    ("PPT", "Ppt"),
    ("XML", "Xml"),
    ("API", "Api"),
    ("CSV", "Csv"),
    ("TXT", "Txt"),
    ("CPU", "Cpu"),
    ("FAQ", "Faq"),
    ("GPU", "Gpu"),
    ("IDE", "Ide"),
    ("PDF", "Pdf"),
    ("AJAX", "Ajax"),
    ("ACK", "Ack"),
    ("AES", "Aes"),
    ("DES", "Des"),
    ("CAD", "Cad"),
    ("CDN", "Cdn"),
    ("COM", "Com"),
    ("CRC", "Crc"),
    ("CSS", "Css"),
    ("HTML", "Html"),
    ("HTTP", "Http"),
    ("TCPIP", "TcpIp"),
    ("TCP", "Tcp"),
    ("ADO", "Ado"),
    ("DB", "Db"),
    ("DVD", "Dvd"),
    ("DSN", "Dsn"),
    ("DW", "Dw"),
    ("EMAIL", "Email"),
    ("EMail", "Email"),
    ("FQDN", "Fqdn"),
    ("GUI", "Gui"),
    ("IOT", "IoT"),
    ("JPG", "Jpg"),
    ("JPEG", "Jpeg"),
    ("BMP", "Bmp"),
    ("XLSX", "Xlsx"),
    ("XLS", "Xls"),
    ("MP", "Mp"),
    ("DOCX", "Docx"),
    ("DOC", "Doc"),
    ("LOG", "Log"),
    ("MSG", "Msg"),
    ("RTF", "Rtf"),
    ("DAT", "Dat"),
    ("PPS", "Pps"),
    ("WAV", "Wav"),
    ("WMA", "Wma"),
    ("AVI", "Avi"),
    ("GIF", "Gif"),
    ("PNG", "Png"),
    ("TIFF", "Tiff"),
    ("TIF", "Tif"),
    ("PS", "Ps"),
    ("JSP", "Jsp"),
    ("JS", "Js"),
    ("PHP", "Php"),
    ("DLL", "Dll"),
    ("ICO", "Ico"),
    ("RAR", "Rar"),
    ("ZIP", "Zip"),
    ("BIN", "Bin"),
    ("BAK", "Bak"),
    ("TMP", "Tmp"),
];

/// Repair a name towards `camelCase`.
///
/// Lowercases the first two characters and the last one, rewrites known
/// acronyms, then breaks up any remaining runs of capitals. Names shorter
/// than three characters are lowercased whole.
#[must_use]
pub fn rewrite_casing(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() < 3 {
        return name.to_lowercase();
    }

    let mut normalized = String::with_capacity(name.len());
    normalized.extend(chars[..2].iter().flat_map(|c| c.to_lowercase()));
    normalized.extend(&chars[2..chars.len() - 1]);
    normalized.extend(chars[chars.len() - 1].to_lowercase());

    finish(&normalized)
}

/// Repair a name towards `PascalCase`: the first character is uppercased,
/// the last lowercased, then the same acronym and capital-run passes apply.
#[must_use]
pub fn rewrite_pascal(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    match chars.len() {
        0 => String::new(),
        1 | 2 => {
            let mut out: String = chars[0].to_uppercase().collect();
            out.extend(chars[1..].iter().flat_map(|c| c.to_lowercase()));
            out
        }
        len => {
            let mut normalized = String::with_capacity(name.len());
            normalized.extend(chars[0].to_uppercase());
            normalized.extend(&chars[1..len - 1]);
            normalized.extend(chars[len - 1].to_lowercase());
            finish(&normalized)
        }
    }
}

#[must_use]
pub fn prefix_underscore(name: &str) -> String {
    format!("_{name}")
}

/// Plain substring replacement in table order.
#[must_use]
pub fn replace_acronyms(name: &str) -> String {
    ACRONYMS
        .iter()
        .fold(name.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Lowercase every capital that directly follows a kept capital, keeping the
/// first two and the last character untouched.
#[must_use]
pub fn remove_consecutive_capitals(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() < 3 {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len());
    out.extend(&chars[..2]);

    let mut previous_was_capital = false;
    for &c in &chars[2..chars.len() - 1] {
        if c.is_uppercase() && previous_was_capital {
            out.extend(c.to_lowercase());
            previous_was_capital = false;
        } else {
            out.push(c);
            previous_was_capital = c.is_uppercase();
        }
    }

    out.push(chars[chars.len() - 1]);
    out
}

fn finish(normalized: &str) -> String {
    let replaced = replace_acronyms(normalized);
    if has_consecutive_uppercase(&replaced) {
        remove_consecutive_capitals(&replaced)
    } else {
        replaced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::NameShape;

    #[test]
    fn rewrites_field_names() {
        assert_eq!(rewrite_casing("FieldTOrename"), "fieldTorename");
        assert_eq!(
            rewrite_casing("FieldWithAcronymOfIOTToUpdate"),
            "fieldWithAcronymOfIoTtoUpdate"
        );
        assert_eq!(
            rewrite_casing("FieldWithAcronymOfXMLToUpdate"),
            "fieldWithAcronymOfXmlToUpdate"
        );
    }

    #[test]
    fn longer_acronyms_win() {
        assert_eq!(replace_acronyms("ExportPPTXFile"), "ExportPptxFile");
        assert_eq!(replace_acronyms("OpenTCPIPSocket"), "OpenTcpIpSocket");
        assert_eq!(replace_acronyms("SaveDOCXNow"), "SaveDocxNow");
    }

    #[test]
    fn replacement_is_not_word_aware() {
        assert_eq!(replace_acronyms("COMPANY"), "ComPANY");
    }

    #[test]
    fn short_names_are_lowercased() {
        assert_eq!(rewrite_casing("ID"), "id");
        assert_eq!(rewrite_casing("X"), "x");
        assert_eq!(rewrite_casing(""), "");
        assert_eq!(rewrite_pascal("id"), "Id");
        assert_eq!(rewrite_pascal(""), "");
    }

    #[test]
    fn valid_names_are_unchanged() {
        for name in ["fieldName", "orderTotal", "customerId", "httpClient"] {
            assert!(!NameShape::CamelCaseField.violated_by(name));
            assert_eq!(rewrite_casing(name), name);
            assert_eq!(rewrite_casing(&rewrite_casing(name)), rewrite_casing(name));
        }
        for name in ["TypeName", "OrderService", "HttpClient"] {
            assert_eq!(rewrite_pascal(name), name);
        }
    }

    #[test]
    fn pascal_repairs_members() {
        assert_eq!(rewrite_pascal("HTTPClient"), "HttpClient");
        assert_eq!(rewrite_pascal("TypeNameG"), "TypeNameg");
        assert_eq!(rewrite_pascal("getURL"), "GetUrl");
        assert_eq!(rewrite_pascal("loadXMLData"), "LoadXmlData");
    }

    #[test]
    fn capital_runs_alternate() {
        assert_eq!(remove_consecutive_capitals("abCDEFg"), "abCdEfg");
    }

    #[test]
    fn prefixes_underscore() {
        assert_eq!(prefix_underscore("count"), "_count");
    }
}
