//! Streaming reader for the Orphanet "phenotypes associated with rare
//! disorders" product (`en_product4.xml`).
//!
//! Only the subset of the document the catalog needs is read:
//!
//! ```text
//! JDBOR/HPODisorderSetStatusList/HPODisorderSetStatus/Disorder[@id]
//!     ExpertLink, Name, DisorderType/Name
//!     HPODisorderAssociationList/HPODisorderAssociation[@id]
//!         HPO/HPOTerm, HPOFrequency/Name
//! ```
//!
//! Associations whose frequency is "Excluded" are dropped.

mod frequency;

pub use frequency::{parse_frequency, Frequency};

use domain::{Catalog, CatalogError, Disorder, Symptom};
use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed XML attribute: {0}")]
    Attribute(#[from] AttrError),

    #[error("Missing required element '{element}' in '{parent}'")]
    MissingElement { element: String, parent: String },

    #[error("Missing required attribute '{attribute}' on '{element}'")]
    MissingAttribute { attribute: String, element: String },

    #[error("Invalid number in {field}: '{value}'")]
    InvalidNumber { field: String, value: String },

    #[error("Unrecognized frequency text: '{0}'")]
    InvalidFrequency(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

fn missing(element: &str, parent: &str) -> IngestError {
    IngestError::MissingElement {
        element: element.to_string(),
        parent: parent.to_string(),
    }
}

pub fn parse_str(xml: &str) -> Result<Catalog, IngestError> {
    parse_reader(xml.as_bytes())
}

pub fn parse_reader<R: BufRead>(source: R) -> Result<Catalog, IngestError> {
    let mut reader = Reader::from_reader(source);
    reader.config_mut().trim_text(true);

    let mut parser = OrphanetParser::default();
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => parser.open(&e)?,
            Event::Empty(e) => {
                parser.open(&e)?;
                parser.close()?;
            }
            Event::Text(t) => parser.text(&t.unescape()?),
            Event::CData(t) => parser.text(&String::from_utf8_lossy(&t)),
            Event::End(_) => parser.close()?,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    parser.finish()
}

#[derive(Default)]
struct OrphanetParser {
    path: Vec<String>,
    saw_status_list: bool,
    disorder: Option<DisorderDraft>,
    association: Option<AssociationDraft>,
    disorders: Vec<Disorder>,
    excluded: usize,
}

impl OrphanetParser {
    fn open(&mut self, element: &BytesStart) -> Result<(), IngestError> {
        let name = String::from_utf8_lossy(element.local_name().as_ref()).into_owned();
        let parent = self.path.last().map(String::as_str);

        match (parent, name.as_str()) {
            (Some("JDBOR"), "HPODisorderSetStatusList") => self.saw_status_list = true,
            (Some("HPODisorderSetStatus"), "Disorder") => {
                self.disorder = Some(DisorderDraft::new(id_attribute(element, "Disorder")?));
            }
            (Some("Disorder"), "HPODisorderAssociationList") => {
                if let Some(disorder) = self.disorder.as_mut() {
                    disorder.has_association_list = true;
                }
            }
            (Some("HPODisorderAssociationList"), "HPODisorderAssociation")
                if self.disorder.is_some() =>
            {
                self.association = Some(AssociationDraft::new(id_attribute(
                    element,
                    "HPODisorderAssociation",
                )?));
            }
            _ => {}
        }

        self.path.push(name);
        Ok(())
    }

    fn text(&mut self, text: &str) {
        let [.., parent, element] = self.path.as_slice() else {
            return;
        };

        let slot = match (parent.as_str(), element.as_str()) {
            ("Disorder", "ExpertLink") => self.disorder.as_mut().map(|d| &mut d.expert_link),
            ("Disorder", "Name") => self.disorder.as_mut().map(|d| &mut d.name),
            ("DisorderType", "Name") => self.disorder.as_mut().map(|d| &mut d.disorder_type),
            ("HPO", "HPOTerm") => self.association.as_mut().map(|a| &mut a.term),
            ("HPOFrequency", "Name") => self.association.as_mut().map(|a| &mut a.frequency),
            _ => None,
        };

        if let Some(slot) = slot {
            slot.get_or_insert_with(String::new).push_str(text);
        }
    }

    fn close(&mut self) -> Result<(), IngestError> {
        let Some(name) = self.path.pop() else {
            return Ok(());
        };
        let parent = self.path.last().map(String::as_str);

        match (parent, name.as_str()) {
            (Some("HPODisorderAssociationList"), "HPODisorderAssociation") => {
                if let Some(association) = self.association.take() {
                    match association.finish()? {
                        Some(symptom) => {
                            if let Some(disorder) = self.disorder.as_mut() {
                                disorder.symptoms.push(symptom);
                            }
                        }
                        None => self.excluded += 1,
                    }
                }
            }
            (Some("HPODisorderSetStatus"), "Disorder") => {
                if let Some(disorder) = self.disorder.take() {
                    self.disorders.push(disorder.finish()?);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn finish(self) -> Result<Catalog, IngestError> {
        if !self.saw_status_list {
            return Err(missing("HPODisorderSetStatusList", "JDBOR"));
        }
        tracing::info!(
            disorders = self.disorders.len(),
            excluded_associations = self.excluded,
            "parsed Orphanet disorder catalog"
        );
        Ok(Catalog::new(self.disorders))
    }
}

struct DisorderDraft {
    id: u64,
    expert_link: Option<String>,
    name: Option<String>,
    disorder_type: Option<String>,
    has_association_list: bool,
    symptoms: Vec<Symptom>,
}

impl DisorderDraft {
    fn new(id: u64) -> Self {
        Self {
            id,
            expert_link: None,
            name: None,
            disorder_type: None,
            has_association_list: false,
            symptoms: Vec::new(),
        }
    }

    fn finish(self) -> Result<Disorder, IngestError> {
        let parent = format!("Disorder {}", self.id);
        let expert_link = self.expert_link.ok_or_else(|| missing("ExpertLink", &parent))?;
        let name = self.name.ok_or_else(|| missing("Name", &parent))?;
        let disorder_type = self
            .disorder_type
            .ok_or_else(|| missing("DisorderType/Name", &parent))?;
        if !self.has_association_list {
            return Err(missing("HPODisorderAssociationList", &parent));
        }

        Ok(Disorder::new(self.id, name, expert_link, disorder_type, self.symptoms))
    }
}

struct AssociationDraft {
    id: u64,
    term: Option<String>,
    frequency: Option<String>,
}

impl AssociationDraft {
    fn new(id: u64) -> Self {
        Self {
            id,
            term: None,
            frequency: None,
        }
    }

    /// `None` for excluded associations.
    fn finish(self) -> Result<Option<Symptom>, IngestError> {
        let parent = format!("HPODisorderAssociation {}", self.id);
        let frequency = self
            .frequency
            .ok_or_else(|| missing("HPOFrequency/Name", &parent))?;

        match parse_frequency(&frequency)? {
            Frequency::Excluded => Ok(None),
            Frequency::Observed { description, range } => {
                let term = self.term.ok_or_else(|| missing("HPO/HPOTerm", &parent))?;
                Ok(Some(Symptom::new(self.id, term, description, range)?))
            }
        }
    }
}

fn id_attribute(element: &BytesStart, element_name: &str) -> Result<u64, IngestError> {
    let attribute = element
        .try_get_attribute("id")?
        .ok_or_else(|| IngestError::MissingAttribute {
            attribute: "id".to_string(),
            element: element_name.to_string(),
        })?;
    let value = attribute.unescape_value()?;
    value
        .trim()
        .parse()
        .map_err(|_| IngestError::InvalidNumber {
            field: format!("{element_name}/@id"),
            value: value.into_owned(),
        })
}
