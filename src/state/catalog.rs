use super::data::ImageRecord;

/// The Catalog holds every image record loaded at startup.
/// It also tracks the distinct categories in order of first appearance,
/// which feed the category dropdown.
///
/// A record's identity is its position in the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<ImageRecord>,
    categories: Vec<String>,
}

impl Catalog {
    /// Build a catalog from records in document order
    pub fn new(records: Vec<ImageRecord>) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for record in &records {
            if !categories.contains(&record.category) {
                categories.push(record.category.clone());
            }
        }

        Catalog { records, categories }
    }

    /// Parse a JSON array of image records
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let records: Vec<ImageRecord> = serde_json::from_slice(bytes)?;
        Ok(Self::new(records))
    }

    /// All records in document order
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    /// Get a record by its catalog position
    pub fn get(&self, index: usize) -> Option<&ImageRecord> {
        self.records.get(index)
    }

    /// Distinct categories in order of first appearance
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
