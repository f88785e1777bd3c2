/// Category tab bookkeeping: which tab and section a click activates
use crate::config::SectionLookup;

/// Category keys of the tabs and sections, in document order.
///
/// A tab or section without the key attribute is kept as `None` so indices
/// stay aligned with the elements.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryIndex {
    tabs: Vec<Option<String>>,
    sections: Vec<Option<String>>,
}

/// Marker changes for one click
#[derive(Debug, Clone, PartialEq)]
pub enum Plan {
    /// Clear all markers, then mark `tab` and `section`
    Activate { tab: usize, section: usize },
    /// Clear all markers, mark `tab`, then fail on the missing section
    ActivateTabThenFail { tab: usize, key: String },
    /// Leave all markers as they are
    Ignore { key: String },
}

impl CategoryIndex {
    pub fn new(tabs: Vec<Option<String>>, sections: Vec<Option<String>>) -> CategoryIndex {
        CategoryIndex { tabs, sections }
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// First tab carrying `key`
    pub fn tab_for(&self, key: &str) -> Option<usize> {
        self.tabs.iter().position(|k| k.as_deref() == Some(key))
    }

    /// First section carrying `key` (exact, case-sensitive match)
    pub fn section_for(&self, key: &str) -> Option<usize> {
        self.sections.iter().position(|k| k.as_deref() == Some(key))
    }

    /// Work out what clicking tab `tab` does.
    ///
    /// A tab without a key never matches a section, the same as a key that
    /// no section carries.
    pub fn plan(&self, tab: usize, mode: SectionLookup) -> Plan {
        let key = self.tabs.get(tab).cloned().flatten();

        match key.as_deref().and_then(|k| self.section_for(k)) {
            Some(section) => Plan::Activate { tab, section },
            None => {
                let key = key.unwrap_or_default();
                match mode {
                    SectionLookup::Strict => Plan::ActivateTabThenFail { tab, key },
                    SectionLookup::Lenient => Plan::Ignore { key },
                }
            }
        }
    }
}
