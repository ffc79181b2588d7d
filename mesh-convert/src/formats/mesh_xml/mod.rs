use crate::error::ConvertError;
use crate::format::Format;
use crate::records::RecordSet;

mod parser;

pub struct MeshXmlFormat;

impl Format for MeshXmlFormat {
    fn name(&self) -> &str {
        "mesh-xml"
    }

    fn description(&self) -> &str {
        "NLM MeSH XML (descriptor and supplemental record sets)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["xml"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        false
    }

    fn parse(&self, source: &str) -> Result<RecordSet, ConvertError> {
        parser::parse_records(source)
    }
}
