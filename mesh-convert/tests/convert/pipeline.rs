use insta::assert_snapshot;
use mesh_convert::{ConvertError, FormatRegistry};

const DESCRIPTOR_XML: &str = r#"<?xml version="1.0"?>
<DescriptorRecordSet LanguageCode="eng">
  <DescriptorRecord DescriptorClass="1">
    <DescriptorUI>D000001</DescriptorUI>
    <DescriptorName><String>Calcimycin</String></DescriptorName>
    <AllowableQualifiersList>
      <AllowableQualifier>
        <QualifierReferredTo>
          <QualifierUI>Q000302</QualifierUI>
          <QualifierName><String>isolation &amp; purification</String></QualifierName>
        </QualifierReferredTo>
      </AllowableQualifier>
    </AllowableQualifiersList>
  </DescriptorRecord>
  <DescriptorRecord DescriptorClass="2">
    <DescriptorUI>D005260</DescriptorUI>
    <DescriptorName><String>Female</String></DescriptorName>
  </DescriptorRecord>
</DescriptorRecordSet>"#;

const SUPPLEMENTAL_XML: &str = r#"<?xml version="1.0"?>
<SupplementalRecordSet LanguageCode="eng">
  <SupplementalRecord SCRClass="1">
    <SupplementalRecordUI>C000002</SupplementalRecordUI>
    <SupplementalRecordName><String>bevonium</String></SupplementalRecordName>
    <ConceptList>
      <Concept PreferredConceptYN="Y">
        <ConceptUI>M0041874</ConceptUI>
        <ConceptName><String>bevonium</String></ConceptName>
        <TermList>
          <Term>
            <TermUI>T078172</TermUI>
            <String>bevonium</String>
          </Term>
        </TermList>
      </Concept>
    </ConceptList>
  </SupplementalRecord>
</SupplementalRecordSet>"#;

#[test]
fn test_descriptor_xml_to_jsonl() {
    let registry = FormatRegistry::with_defaults();

    let records = registry.parse(DESCRIPTOR_XML, "mesh-xml").unwrap();
    let jsonl = registry.serialize(&records, "jsonl").unwrap();

    assert_snapshot!(jsonl, @r#"
{"id":"D000001","name":"Calcimycin","class":1,"qualifiers":[{"id":"Q000302","name":"isolation & purification"}]}
{"id":"D005260","name":"Female","class":2}
"#);
}

#[test]
fn test_supplemental_xml_to_jsonl() {
    let registry = FormatRegistry::with_defaults();

    let records = registry.parse(SUPPLEMENTAL_XML, "mesh-xml").unwrap();
    let jsonl = registry.serialize(&records, "jsonl").unwrap();

    assert_snapshot!(jsonl.trim_end(), @r#"{"id":"C000002","name":"bevonium","class":1,"concepts":[{"id":"M0041874","name":"bevonium","isPreferred":true,"terms":[{"id":"T078172","name":"bevonium"}]}]}"#);
}

#[test]
fn test_xml_to_map() {
    let registry = FormatRegistry::with_defaults();

    let records = registry.parse(DESCRIPTOR_XML, "mesh-xml").unwrap();
    let map = registry.serialize(&records, "map").unwrap();

    assert_snapshot!(map, @r#"{"D000001":"Calcimycin","D005260":"Female"}"#);
}

#[test]
fn test_jsonl_to_map() {
    let registry = FormatRegistry::with_defaults();

    let jsonl = "{\"id\":\"D000002\",\"name\":\"Temefos\"}\n\
                 {\"id\":\"D000001\",\"name\":\"Calcimycin\"}\n";
    let records = registry.parse(jsonl, "jsonl").unwrap();
    let map = registry.serialize(&records, "map").unwrap();

    assert_snapshot!(map, @r#"{"D000001":"Calcimycin","D000002":"Temefos"}"#);
}

#[test]
fn test_jsonl_survives_reparse_after_xml_import() {
    let registry = FormatRegistry::with_defaults();

    let records = registry.parse(DESCRIPTOR_XML, "mesh-xml").unwrap();
    let jsonl = registry.serialize(&records, "jsonl").unwrap();
    let reparsed = registry.parse(&jsonl, "jsonl").unwrap();

    assert_eq!(reparsed, records);
}

#[test]
fn test_map_is_a_dead_end() {
    let registry = FormatRegistry::with_defaults();

    let result = registry.parse("{\"D000001\":\"Calcimycin\"}", "map");
    match result.unwrap_err() {
        ConvertError::NotSupported(msg) => assert!(msg.contains("map")),
        other => panic!("Expected NotSupported, got {other:?}"),
    }
}
