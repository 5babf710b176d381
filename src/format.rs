use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Display format of a previewed file, resolved from its extension.
///
/// This is a closed table: nothing is inferred from content, and any
/// extension not listed here falls back to [`Format::Text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    JavaScript,
    Html,
    Css,
    Json,
    Xml,
    PlainUpper,
    Markdown,
    Python,
    Php,
    Yaml,
    Toml,
    Pdf,
    TypeScript,
    React,
    SourceMap,
    SvgXml,
    C,
    Cpp,
    CSharp,
    Vue,
    Java,
    Png,
    Zip,
    SevenZip,
    Text,
}

impl Format {
    /// Human-readable label shown in the stats panel and history list.
    pub fn label(self) -> &'static str {
        match self {
            Format::JavaScript => "JavaScript",
            Format::Html => "HTML",
            Format::Css => "CSS",
            Format::Json => "JSON",
            Format::Xml => "XML",
            Format::PlainUpper => "TEXT",
            Format::Markdown => "Markdown",
            Format::Python => "Python",
            Format::Php => "PHP",
            Format::Yaml => "YAML",
            Format::Toml => "TOML",
            Format::Pdf => "PDF",
            Format::TypeScript => "TypeScript",
            Format::React => "React",
            Format::SourceMap => "MAP",
            Format::SvgXml => "SVG+XML",
            Format::C => "C",
            Format::Cpp => "C++",
            Format::CSharp => "C#",
            Format::Vue => "Vue.JS",
            Format::Java => "Java",
            Format::Png => "PNG",
            Format::Zip => "ZIP",
            Format::SevenZip => "7-Zip",
            Format::Text => "Text",
        }
    }

    /// Resolve a lowercased extension. Unknown extensions map to `Text`.
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "js" => Format::JavaScript,
            "html" | "htm" => Format::Html,
            "css" => Format::Css,
            "json" => Format::Json,
            "xml" => Format::Xml,
            "txt" => Format::PlainUpper,
            "md" => Format::Markdown,
            "py" => Format::Python,
            "php" => Format::Php,
            "yml" => Format::Yaml,
            "toml" => Format::Toml,
            "pdf" => Format::Pdf,
            "ts" | "tsx" => Format::TypeScript,
            "jsx" => Format::React,
            "map" => Format::SourceMap,
            "svg" => Format::SvgXml,
            "c" => Format::C,
            "cpp" => Format::Cpp,
            "h" => Format::CSharp,
            "vue" => Format::Vue,
            "java" => Format::Java,
            "png" => Format::Png,
            "zip" => Format::Zip,
            "7z" => Format::SevenZip,
            _ => Format::Text,
        }
    }

    /// Resolve a file name: lowercased suffix after the final `.`.
    ///
    /// A name without a dot is looked up whole (and so resolves to `Text`
    /// unless it happens to be a known extension).
    pub fn for_name(name: &str) -> Self {
        let ext = match name.rsplit_once('.') {
            Some((_, suffix)) => suffix,
            None => name,
        };
        Format::from_extension(&ext.to_lowercase())
    }

    /// Reverse lookup used when deserializing persisted entries.
    fn from_label(label: &str) -> Self {
        const ALL: [Format; 25] = [
            Format::JavaScript,
            Format::Html,
            Format::Css,
            Format::Json,
            Format::Xml,
            Format::PlainUpper,
            Format::Markdown,
            Format::Python,
            Format::Php,
            Format::Yaml,
            Format::Toml,
            Format::Pdf,
            Format::TypeScript,
            Format::React,
            Format::SourceMap,
            Format::SvgXml,
            Format::C,
            Format::Cpp,
            Format::CSharp,
            Format::Vue,
            Format::Java,
            Format::Png,
            Format::Zip,
            Format::SevenZip,
            Format::Text,
        ];
        ALL.into_iter()
            .find(|f| f.label() == label)
            .unwrap_or(Format::Text)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Format {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Format {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FormatVisitor;

        impl<'de> Visitor<'de> for FormatVisitor {
            type Value = Format;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a format label string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Format, E> {
                // Legacy records may carry labels from older tables; anything
                // unrecognized degrades to Text instead of failing the blob.
                Ok(Format::from_label(value))
            }
        }

        deserializer.deserialize_str(FormatVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions_resolve_case_insensitively() {
        assert_eq!(Format::for_name("app.JS"), Format::JavaScript);
        assert_eq!(Format::for_name("index.html"), Format::Html);
        assert_eq!(Format::for_name("notes.md"), Format::Markdown);
        assert_eq!(Format::for_name("tool.py"), Format::Python);
    }

    #[test]
    fn unknown_or_missing_extension_is_text() {
        assert_eq!(Format::for_name("archive.xyz"), Format::Text);
        assert_eq!(Format::for_name("Makefile"), Format::Text);
        assert_eq!(Format::for_name(".bashrc"), Format::Text);
    }

    #[test]
    fn final_suffix_wins_for_compound_extensions() {
        assert_eq!(Format::for_name("bundle.min.js"), Format::JavaScript);
        assert_eq!(Format::for_name("styles.old.css"), Format::Css);
    }

    #[test]
    fn label_round_trips_through_serde() {
        let json = serde_json::to_string(&Format::TypeScript).unwrap();
        assert_eq!(json, "\"TypeScript\"");
        let back: Format = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Format::TypeScript);
    }

    #[test]
    fn unknown_label_deserializes_to_text() {
        let back: Format = serde_json::from_str("\"Fortran\"").unwrap();
        assert_eq!(back, Format::Text);
    }
}
