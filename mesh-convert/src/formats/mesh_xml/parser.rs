use crate::error::ConvertError;
use crate::records::{Concept, Record, RecordSet, Relation, RelationKind, TermRef};
use roxmltree::Node;

pub fn parse_records(source: &str) -> Result<RecordSet, ConvertError> {
    // MeSH distribution files carry a DOCTYPE declaration, which roxmltree
    // rejects unless explicitly allowed.
    let mut options = roxmltree::ParsingOptions::default();
    options.allow_dtd = true;
    let doc = roxmltree::Document::parse_with_options(source, options)
        .map_err(|e| ConvertError::ParseError(format!("XML parsing error: {e}")))?;

    let root = doc.root_element();
    let mut records = RecordSet::new();
    match root.tag_name().name() {
        "DescriptorRecordSet" => {
            for node in elements(root, "DescriptorRecord") {
                records.push(parse_descriptor(node)?);
            }
        }
        "SupplementalRecordSet" => {
            for node in elements(root, "SupplementalRecord") {
                records.push(parse_supplemental(node)?);
            }
        }
        other => {
            return Err(ConvertError::ParseError(format!(
                "Root element is <{other}>, expected <DescriptorRecordSet> or <SupplementalRecordSet>"
            )))
        }
    }
    Ok(records)
}

fn parse_descriptor(node: Node) -> Result<Record, ConvertError> {
    let id = child_text(node, "DescriptorUI");
    if id.is_empty() {
        return Err(ConvertError::ParseError(
            "DescriptorRecord without a DescriptorUI".to_string(),
        ));
    }
    let name = name_string(node, "DescriptorName");
    if name.is_empty() {
        return Err(ConvertError::ParseError(format!(
            "Record {id}: empty DescriptorName"
        )));
    }
    let class = parse_class(node, "DescriptorClass", &id)?;

    let qualifiers = match child(node, "AllowableQualifiersList") {
        Some(list) => parse_qualifier_list(list),
        None => Vec::new(),
    };
    let concepts = match child(node, "ConceptList") {
        Some(list) => parse_concept_list(list)?,
        None => Vec::new(),
    };

    Ok(Record {
        id,
        name,
        class: Some(class),
        qualifiers,
        concepts,
    })
}

fn parse_supplemental(node: Node) -> Result<Record, ConvertError> {
    let id = child_text(node, "SupplementalRecordUI");
    if id.is_empty() {
        return Err(ConvertError::ParseError(
            "SupplementalRecord without a SupplementalRecordUI".to_string(),
        ));
    }
    let name = name_string(node, "SupplementalRecordName");
    if name.is_empty() {
        return Err(ConvertError::ParseError(format!(
            "Record {id}: empty SupplementalRecordName"
        )));
    }
    let class = parse_class(node, "SCRClass", &id)?;

    // Supplemental records have no allowable qualifiers
    let concepts = match child(node, "ConceptList") {
        Some(list) => parse_concept_list(list)?,
        None => Vec::new(),
    };

    Ok(Record {
        id,
        name,
        class: Some(class),
        qualifiers: Vec::new(),
        concepts,
    })
}

fn parse_qualifier_list(list: Node) -> Vec<TermRef> {
    let mut qualifiers = Vec::new();
    for qualifier in elements(list, "AllowableQualifier") {
        if let Some(referred) = child(qualifier, "QualifierReferredTo") {
            qualifiers.push(TermRef {
                id: child_text(referred, "QualifierUI"),
                name: name_string(referred, "QualifierName"),
            });
        }
    }
    qualifiers
}

fn parse_concept_list(list: Node) -> Result<Vec<Concept>, ConvertError> {
    let mut concepts = Vec::new();
    for node in elements(list, "Concept") {
        let id = child_text(node, "ConceptUI");
        let preferred = node.attribute("PreferredConceptYN") == Some("Y");
        let name = name_string(node, "ConceptName");
        // Scope notes end with layout whitespace in the source files
        let note = child_text(node, "ScopeNote").trim_end().to_string();

        let casn1 = child_text(node, "CASN1Name");
        let casn1_name = if casn1.is_empty() { None } else { Some(casn1) };

        let terms = match child(node, "TermList") {
            Some(list) => parse_term_list(list),
            None => Vec::new(),
        };
        let relations = match child(node, "ConceptRelationList") {
            Some(list) => parse_relation_list(list, &id)?,
            None => Vec::new(),
        };

        concepts.push(Concept {
            id,
            name,
            preferred,
            note,
            casn1_name,
            terms,
            relations,
        });
    }
    Ok(concepts)
}

fn parse_term_list(list: Node) -> Vec<TermRef> {
    elements(list, "Term")
        .map(|term| TermRef {
            id: child_text(term, "TermUI"),
            name: child_text(term, "String"),
        })
        .collect()
}

fn parse_relation_list(list: Node, concept_id: &str) -> Result<Vec<Relation>, ConvertError> {
    let mut relations = Vec::new();
    for relation in elements(list, "ConceptRelation") {
        // The three relation names are mutually exclusive
        // See https://www.nlm.nih.gov/mesh/xml_data_elements.html
        let kind = match relation.attribute("RelationName") {
            Some("BRD") => RelationKind::Broader,
            Some("NRW") => RelationKind::Narrower,
            Some("REL") => RelationKind::Related,
            other => {
                return Err(ConvertError::ParseError(format!(
                    "Concept {concept_id}: unknown relation name '{}'",
                    other.unwrap_or("")
                )))
            }
        };

        // Either side of the relation may be the owning concept; store the
        // other one.
        let concept1 = child_text(relation, "Concept1UI");
        let concept2 = child_text(relation, "Concept2UI");
        let other = if concept_id == concept1 {
            concept2
        } else if concept_id == concept2 {
            concept1
        } else {
            return Err(ConvertError::ParseError(format!(
                "Concept {concept_id} is not part of its own relation <{concept1}, {concept2}>"
            )));
        };

        relations.push(Relation { other, kind });
    }
    Ok(relations)
}

fn elements<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == tag)
}

fn child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == tag)
}

/// Direct text content of the named child, or an empty string when the
/// child is missing or empty.
fn child_text(node: Node, tag: &str) -> String {
    child(node, tag)
        .and_then(|n| n.text())
        .unwrap_or("")
        .to_string()
}

/// Text of the `<String>` element nested under the named child, the shape
/// MeSH uses for every name element.
fn name_string(node: Node, tag: &str) -> String {
    match child(node, tag) {
        Some(n) => child_text(n, "String"),
        None => String::new(),
    }
}

fn parse_class(node: Node, attr: &str, id: &str) -> Result<i32, ConvertError> {
    let value = node.attribute(attr).unwrap_or("");
    value.parse::<i32>().map_err(|_| {
        ConvertError::ParseError(format!(
            "Record {id}: {attr} attribute is '{value}', expected an integer"
        ))
    })
}
