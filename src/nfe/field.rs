use std::collections::HashMap;

use super::xml::XmlWriter;
use crate::core::NfeError;

/// Ordered attribute schema of a document element: (key, default) pairs.
///
/// Each element variant owns an independently-declared constant — schemas
/// are never shared or extended at runtime. An empty default means the
/// attribute is omitted unless explicitly assigned.
pub type AttrSchema = &'static [(&'static str, &'static str)];

/// One element of the fiscal document: a tag, XML element attributes, an
/// ordered set of declared sub-fields, and appended children.
///
/// Serialization order of declared attributes is schema order, not
/// assignment order; a sub-field whose resolved value (assigned falling
/// back to default) is empty is omitted entirely. Children appended with
/// [`push`](Self::push) or [`push_leaf`](Self::push_leaf) follow the
/// declared attributes in append order. Nodes are mutated only while being
/// assembled; once attached to a parent they are read-only.
#[derive(Debug, Clone)]
pub struct FieldNode {
    tag: &'static str,
    xml_attrs: Vec<(&'static str, String)>,
    schema: AttrSchema,
    values: HashMap<&'static str, String>,
    children: Vec<Child>,
}

#[derive(Debug, Clone)]
enum Child {
    Node(FieldNode),
    Leaf(&'static str, String),
}

impl FieldNode {
    /// Create a node with all declared attributes unset.
    pub fn new(tag: &'static str, schema: AttrSchema) -> Self {
        Self {
            tag,
            xml_attrs: Vec::new(),
            schema,
            values: HashMap::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Set an XML element attribute (e.g. `versao`, `nItem`).
    pub fn set_xml_attr(&mut self, key: &'static str, value: impl Into<String>) {
        self.xml_attrs.push((key, value.into()));
    }

    /// Assign a value to a declared attribute.
    pub fn set(&mut self, key: &'static str, value: impl Into<String>) -> Result<(), NfeError> {
        if !self.schema.iter().any(|(k, _)| *k == key) {
            return Err(NfeError::MissingAttribute { tag: self.tag, key });
        }
        self.values.insert(key, value.into());
        Ok(())
    }

    /// Resolved value of a declared attribute: assigned if non-empty,
    /// otherwise the declared default (possibly empty).
    pub fn get(&self, key: &'static str) -> Result<&str, NfeError> {
        let (_, default) = self
            .schema
            .iter()
            .find(|(k, _)| *k == key)
            .ok_or(NfeError::MissingAttribute { tag: self.tag, key })?;
        Ok(self
            .values
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
            .unwrap_or(default))
    }

    /// Append a child node. Attached nodes are no longer mutated.
    pub fn push(&mut self, child: FieldNode) {
        self.children.push(Child::Node(child));
    }

    /// Append a synthetic leaf element after the declared attributes.
    /// Used where the external schema mandates an element outside the
    /// declared order, like the issuer's `IE` after its address.
    pub fn push_leaf(&mut self, tag: &'static str, text: impl Into<String>) {
        self.children.push(Child::Leaf(tag, text.into()));
    }

    pub(crate) fn write_into(&self, w: &mut XmlWriter) -> Result<(), NfeError> {
        let attrs: Vec<(&str, &str)> = self
            .xml_attrs
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .collect();
        w.start_element_with_attrs(self.tag, &attrs)?;
        for (key, _) in self.schema {
            let value = self.get(key)?;
            if value.is_empty() {
                continue;
            }
            w.text_element(key, value)?;
        }
        for child in &self.children {
            match child {
                Child::Node(node) => node.write_into(w)?,
                Child::Leaf(tag, text) => {
                    w.text_element(tag, text)?;
                }
            }
        }
        w.end_element(self.tag)?;
        Ok(())
    }

    /// Serialize this node and everything below it. Read-only: calling it
    /// twice on the same tree yields byte-identical output.
    pub fn to_xml(&self) -> Result<String, NfeError> {
        let mut w = XmlWriter::new()?;
        self.write_into(&mut w)?;
        w.into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SCHEMA: AttrSchema = &[("first", ""), ("second", "padrao"), ("third", "")];

    #[test]
    fn undeclared_key_is_rejected() {
        let mut node = FieldNode::new("teste", TEST_SCHEMA);
        assert!(matches!(
            node.set("nope", "x"),
            Err(NfeError::MissingAttribute { tag: "teste", key: "nope" })
        ));
        assert!(node.get("nope").is_err());
    }

    #[test]
    fn get_resolves_assigned_or_default() {
        let mut node = FieldNode::new("teste", TEST_SCHEMA);
        assert_eq!(node.get("first").unwrap(), "");
        assert_eq!(node.get("second").unwrap(), "padrao");
        node.set("second", "atribuido").unwrap();
        assert_eq!(node.get("second").unwrap(), "atribuido");
        // an assigned empty string falls back to the default
        node.set("second", "").unwrap();
        assert_eq!(node.get("second").unwrap(), "padrao");
    }

    #[test]
    fn serialization_follows_schema_order_and_omits_empty() {
        let mut node = FieldNode::new("teste", TEST_SCHEMA);
        node.set("third", "3").unwrap();
        node.set("first", "1").unwrap();
        let xml = node.to_xml().unwrap();
        let first = xml.find("<first>").unwrap();
        let second = xml.find("<second>").unwrap();
        let third = xml.find("<third>").unwrap();
        assert!(first < second && second < third);
        assert!(xml.contains("<second>padrao</second>"));
    }

    #[test]
    fn appended_children_preserve_order() {
        let mut node = FieldNode::new("pai", &[]);
        node.push(FieldNode::new("filho", &[]));
        node.push_leaf("IE", "123456");
        let xml = node.to_xml().unwrap();
        assert!(xml.find("<filho>").unwrap() < xml.find("<IE>").unwrap());
    }

    #[test]
    fn serialization_is_idempotent() {
        let mut node = FieldNode::new("teste", TEST_SCHEMA);
        node.set("first", "1").unwrap();
        assert_eq!(node.to_xml().unwrap(), node.to_xml().unwrap());
    }
}
