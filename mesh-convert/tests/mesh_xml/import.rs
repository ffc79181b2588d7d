use mesh_convert::records::RelationKind;
use mesh_convert::{ConvertError, FormatRegistry};

/// A small but structurally faithful descriptor set: record attributes,
/// name elements wrapped in <String>, qualifier and concept lists, and the
/// bookkeeping elements (dates, abbreviations) the converter ignores.
const DESCRIPTOR_XML: &str = r#"<?xml version="1.0"?>
<!DOCTYPE DescriptorRecordSet SYSTEM "desc2026.dtd">
<DescriptorRecordSet LanguageCode="eng">
  <DescriptorRecord DescriptorClass="1">
    <DescriptorUI>D000001</DescriptorUI>
    <DescriptorName>
      <String>Calcimycin</String>
    </DescriptorName>
    <DateCreated>
      <Year>1974</Year>
      <Month>11</Month>
      <Day>19</Day>
    </DateCreated>
    <AllowableQualifiersList>
      <AllowableQualifier>
        <QualifierReferredTo>
          <QualifierUI>Q000008</QualifierUI>
          <QualifierName>
            <String>administration &amp; dosage</String>
          </QualifierName>
        </QualifierReferredTo>
        <Abbreviation>AD</Abbreviation>
      </AllowableQualifier>
      <AllowableQualifier>
        <QualifierReferredTo>
          <QualifierUI>Q000737</QualifierUI>
          <QualifierName>
            <String>chemistry</String>
          </QualifierName>
        </QualifierReferredTo>
        <Abbreviation>CH</Abbreviation>
      </AllowableQualifier>
    </AllowableQualifiersList>
    <ConceptList>
      <Concept PreferredConceptYN="Y">
        <ConceptUI>M0000001</ConceptUI>
        <ConceptName>
          <String>Calcimycin</String>
        </ConceptName>
        <CASN1Name>4-Benzoxazolecarboxylic acid, 5-(methylamino)-2-...</CASN1Name>
        <ScopeNote>An ionophorous, polyether antibiotic from Streptomyces chartreusensis.
        </ScopeNote>
        <ConceptRelationList>
          <ConceptRelation RelationName="NRW">
            <Concept1UI>M0000001</Concept1UI>
            <Concept2UI>M0353609</Concept2UI>
          </ConceptRelation>
        </ConceptRelationList>
        <TermList>
          <Term ConceptPreferredTermYN="Y" IsPermutedTermYN="N" LexicalTag="NON">
            <TermUI>T000002</TermUI>
            <String>Calcimycin</String>
          </Term>
        </TermList>
      </Concept>
      <Concept PreferredConceptYN="N">
        <ConceptUI>M0353609</ConceptUI>
        <ConceptName>
          <String>A-23187</String>
        </ConceptName>
        <ConceptRelationList>
          <ConceptRelation RelationName="BRD">
            <Concept1UI>M0000001</Concept1UI>
            <Concept2UI>M0353609</Concept2UI>
          </ConceptRelation>
        </ConceptRelationList>
        <TermList>
          <Term>
            <TermUI>T000001</TermUI>
            <String>A-23187</String>
          </Term>
        </TermList>
      </Concept>
    </ConceptList>
  </DescriptorRecord>
  <DescriptorRecord DescriptorClass="1">
    <DescriptorUI>D000002</DescriptorUI>
    <DescriptorName>
      <String>Temefos</String>
    </DescriptorName>
  </DescriptorRecord>
</DescriptorRecordSet>"#;

const SUPPLEMENTAL_XML: &str = r#"<?xml version="1.0"?>
<SupplementalRecordSet LanguageCode="eng">
  <SupplementalRecord SCRClass="1">
    <SupplementalRecordUI>C000002</SupplementalRecordUI>
    <SupplementalRecordName>
      <String>bevonium</String>
    </SupplementalRecordName>
    <HeadingMappedToList>
      <HeadingMappedTo>
        <DescriptorReferredTo>
          <DescriptorUI>*D010634</DescriptorUI>
          <DescriptorName>
            <String>Glycolates</String>
          </DescriptorName>
        </DescriptorReferredTo>
      </HeadingMappedTo>
    </HeadingMappedToList>
    <ConceptList>
      <Concept PreferredConceptYN="Y">
        <ConceptUI>M0041874</ConceptUI>
        <ConceptName>
          <String>bevonium</String>
        </ConceptName>
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
fn test_import_descriptor_set() {
    let registry = FormatRegistry::with_defaults();
    let records = registry
        .parse(DESCRIPTOR_XML, "mesh-xml")
        .expect("Failed to parse descriptor set");

    assert_eq!(records.len(), 2);

    let first = &records.records[0];
    assert_eq!(first.id, "D000001");
    assert_eq!(first.name, "Calcimycin");
    assert_eq!(first.class, Some(1));

    assert_eq!(first.qualifiers.len(), 2);
    assert_eq!(first.qualifiers[0].id, "Q000008");
    assert_eq!(first.qualifiers[0].name, "administration & dosage");
    assert_eq!(first.qualifiers[1].name, "chemistry");

    let second = &records.records[1];
    assert_eq!(second.id, "D000002");
    assert_eq!(second.name, "Temefos");
    assert!(second.qualifiers.is_empty());
    assert!(second.concepts.is_empty());
}

#[test]
fn test_import_concepts() {
    let registry = FormatRegistry::with_defaults();
    let records = registry
        .parse(DESCRIPTOR_XML, "mesh-xml")
        .expect("Failed to parse descriptor set");

    let concepts = &records.records[0].concepts;
    assert_eq!(concepts.len(), 2);

    let preferred = &concepts[0];
    assert_eq!(preferred.id, "M0000001");
    assert_eq!(preferred.name, "Calcimycin");
    assert!(preferred.preferred);
    // The scope note keeps its content but loses layout whitespace at the end
    assert_eq!(
        preferred.note,
        "An ionophorous, polyether antibiotic from Streptomyces chartreusensis."
    );
    assert_eq!(
        preferred.casn1_name.as_deref(),
        Some("4-Benzoxazolecarboxylic acid, 5-(methylamino)-2-...")
    );
    assert_eq!(preferred.terms.len(), 1);
    assert_eq!(preferred.terms[0].id, "T000002");

    let other = &concepts[1];
    assert!(!other.preferred);
    assert_eq!(other.note, "");
    assert_eq!(other.casn1_name, None);
}

#[test]
fn test_import_relation_direction() {
    let registry = FormatRegistry::with_defaults();
    let records = registry
        .parse(DESCRIPTOR_XML, "mesh-xml")
        .expect("Failed to parse descriptor set");

    let concepts = &records.records[0].concepts;

    // M0000001 appears as Concept1UI, so the stored relation points at the
    // other side
    assert_eq!(concepts[0].relations.len(), 1);
    assert_eq!(concepts[0].relations[0].other, "M0353609");
    assert_eq!(concepts[0].relations[0].kind, RelationKind::Narrower);

    // M0353609 appears as Concept2UI in its own relation
    assert_eq!(concepts[1].relations[0].other, "M0000001");
    assert_eq!(concepts[1].relations[0].kind, RelationKind::Broader);
}

#[test]
fn test_import_supplemental_set() {
    let registry = FormatRegistry::with_defaults();
    let records = registry
        .parse(SUPPLEMENTAL_XML, "mesh-xml")
        .expect("Failed to parse supplemental set");

    assert_eq!(records.len(), 1);

    let record = &records.records[0];
    assert_eq!(record.id, "C000002");
    assert_eq!(record.name, "bevonium");
    assert_eq!(record.class, Some(1));
    assert!(record.qualifiers.is_empty());

    assert_eq!(record.concepts.len(), 1);
    assert!(record.concepts[0].preferred);
    assert_eq!(record.concepts[0].terms[0].name, "bevonium");
}

#[test]
fn test_import_rejects_unknown_root() {
    let registry = FormatRegistry::with_defaults();
    let result = registry.parse("<QualifierRecordSet/>", "mesh-xml");

    match result.unwrap_err() {
        ConvertError::ParseError(msg) => {
            assert!(msg.contains("Root element is <QualifierRecordSet>"), "message was: {msg}");
        }
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_import_rejects_malformed_xml() {
    let registry = FormatRegistry::with_defaults();
    let result = registry.parse("<DescriptorRecordSet><Descriptor", "mesh-xml");

    match result.unwrap_err() {
        ConvertError::ParseError(msg) => assert!(msg.contains("XML parsing error")),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_import_rejects_non_numeric_class() {
    let xml = r#"<DescriptorRecordSet>
  <DescriptorRecord DescriptorClass="one">
    <DescriptorUI>D000001</DescriptorUI>
    <DescriptorName><String>Calcimycin</String></DescriptorName>
  </DescriptorRecord>
</DescriptorRecordSet>"#;

    let registry = FormatRegistry::with_defaults();
    match registry.parse(xml, "mesh-xml").unwrap_err() {
        ConvertError::ParseError(msg) => {
            assert!(msg.contains("D000001"), "message was: {msg}");
            assert!(msg.contains("DescriptorClass"), "message was: {msg}");
        }
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_import_rejects_missing_class() {
    let xml = r#"<DescriptorRecordSet>
  <DescriptorRecord>
    <DescriptorUI>D000001</DescriptorUI>
    <DescriptorName><String>Calcimycin</String></DescriptorName>
  </DescriptorRecord>
</DescriptorRecordSet>"#;

    let registry = FormatRegistry::with_defaults();
    let result = registry.parse(xml, "mesh-xml");
    assert!(matches!(result, Err(ConvertError::ParseError(_))));
}

#[test]
fn test_import_rejects_record_without_ui() {
    let xml = r#"<DescriptorRecordSet>
  <DescriptorRecord DescriptorClass="1">
    <DescriptorName><String>Calcimycin</String></DescriptorName>
  </DescriptorRecord>
</DescriptorRecordSet>"#;

    let registry = FormatRegistry::with_defaults();
    match registry.parse(xml, "mesh-xml").unwrap_err() {
        ConvertError::ParseError(msg) => {
            assert!(msg.contains("without a DescriptorUI"), "message was: {msg}");
        }
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_import_rejects_record_without_name() {
    let xml = r#"<SupplementalRecordSet>
  <SupplementalRecord SCRClass="1">
    <SupplementalRecordUI>C000002</SupplementalRecordUI>
  </SupplementalRecord>
</SupplementalRecordSet>"#;

    let registry = FormatRegistry::with_defaults();
    match registry.parse(xml, "mesh-xml").unwrap_err() {
        ConvertError::ParseError(msg) => {
            assert!(
                msg.contains("C000002: empty SupplementalRecordName"),
                "message was: {msg}"
            );
        }
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_import_rejects_unknown_relation_name() {
    let xml = r#"<DescriptorRecordSet>
  <DescriptorRecord DescriptorClass="1">
    <DescriptorUI>D000001</DescriptorUI>
    <DescriptorName><String>Calcimycin</String></DescriptorName>
    <ConceptList>
      <Concept PreferredConceptYN="Y">
        <ConceptUI>M0000001</ConceptUI>
        <ConceptName><String>Calcimycin</String></ConceptName>
        <ConceptRelationList>
          <ConceptRelation RelationName="SIB">
            <Concept1UI>M0000001</Concept1UI>
            <Concept2UI>M0353609</Concept2UI>
          </ConceptRelation>
        </ConceptRelationList>
      </Concept>
    </ConceptList>
  </DescriptorRecord>
</DescriptorRecordSet>"#;

    let registry = FormatRegistry::with_defaults();
    match registry.parse(xml, "mesh-xml").unwrap_err() {
        ConvertError::ParseError(msg) => {
            assert!(msg.contains("unknown relation name 'SIB'"), "message was: {msg}");
        }
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_import_rejects_foreign_relation() {
    // The owning concept must be one of the two relation sides
    let xml = r#"<DescriptorRecordSet>
  <DescriptorRecord DescriptorClass="1">
    <DescriptorUI>D000001</DescriptorUI>
    <DescriptorName><String>Calcimycin</String></DescriptorName>
    <ConceptList>
      <Concept PreferredConceptYN="Y">
        <ConceptUI>M0000009</ConceptUI>
        <ConceptName><String>Calcimycin</String></ConceptName>
        <ConceptRelationList>
          <ConceptRelation RelationName="REL">
            <Concept1UI>M0000001</Concept1UI>
            <Concept2UI>M0353609</Concept2UI>
          </ConceptRelation>
        </ConceptRelationList>
      </Concept>
    </ConceptList>
  </DescriptorRecord>
</DescriptorRecordSet>"#;

    let registry = FormatRegistry::with_defaults();
    match registry.parse(xml, "mesh-xml").unwrap_err() {
        ConvertError::ParseError(msg) => {
            assert!(
                msg.contains("M0000009 is not part of its own relation"),
                "message was: {msg}"
            );
        }
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_mesh_xml_is_parse_only() {
    let registry = FormatRegistry::with_defaults();
    let records = registry.parse(SUPPLEMENTAL_XML, "mesh-xml").unwrap();

    let result = registry.serialize(&records, "mesh-xml");
    match result.unwrap_err() {
        ConvertError::NotSupported(msg) => assert!(msg.contains("mesh-xml")),
        other => panic!("Expected NotSupported, got {other:?}"),
    }
}
