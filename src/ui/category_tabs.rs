/// Catalog category tabs: clicking a tab shows the matching product section

use std::rc::Rc;

use web_sys::{Document, Element};

use crate::catalog::{CategoryIndex, Plan};
use crate::config::{SectionLookup, StorefrontConfig};
use crate::dom::{Listener, query_all};
use crate::error::UiError;

struct TabState {
    tabs: Vec<Element>,
    sections: Vec<Element>,
    index: CategoryIndex,
    active_class: String,
    mode: SectionLookup,
}

impl TabState {
    fn select_tab(&self, tab: usize) -> Result<(), UiError> {
        match self.index.plan(tab, self.mode) {
            Plan::Activate { tab, section } => {
                self.mark_tab(tab)?;
                self.clear_sections()?;
                self.sections[section].class_list().add_1(&self.active_class)?;
                Ok(())
            }
            Plan::ActivateTabThenFail { tab, key } => {
                self.mark_tab(tab)?;
                self.clear_sections()?;
                Err(UiError::NoMatchingSection(key))
            }
            Plan::Ignore { key } => {
                log::warn!("No product section for category {:?}, tab click ignored", key);
                Ok(())
            }
        }
    }

    fn mark_tab(&self, tab: usize) -> Result<(), UiError> {
        for other in &self.tabs {
            other.class_list().remove_1(&self.active_class)?;
        }
        self.tabs[tab].class_list().add_1(&self.active_class)?;
        Ok(())
    }

    fn clear_sections(&self) -> Result<(), UiError> {
        for section in &self.sections {
            section.class_list().remove_1(&self.active_class)?;
        }
        Ok(())
    }
}

/// Click handlers for every category tab on the page
pub struct CategoryTabSwitcher {
    state: Rc<TabState>,
    _clicks: Vec<Listener>,
}

impl CategoryTabSwitcher {
    pub fn attach(document: &Document, config: &StorefrontConfig) -> Result<CategoryTabSwitcher, UiError> {
        let tabs = query_all(document, &config.tab);
        let sections = query_all(document, &config.section);
        let key_of = |el: &Element| el.get_attribute(&config.category_attr);

        let state = Rc::new(TabState {
            index: CategoryIndex::new(
                tabs.iter().map(key_of).collect(),
                sections.iter().map(key_of).collect(),
            ),
            tabs,
            sections,
            active_class: config.active_class.clone(),
            mode: config.section_lookup,
        });

        let clicks = state
            .tabs
            .iter()
            .enumerate()
            .map(|(i, tab)| {
                let state = state.clone();
                Listener::new(tab, "click", move |_| {
                    state.select_tab(i).map_err(|e| {
                        log::error!("Category tab click failed: {}", e);
                        e.into()
                    })
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::info!(
            "Category tabs bound: {} tabs, {} sections",
            state.index.tab_count(),
            state.index.section_count()
        );

        Ok(CategoryTabSwitcher {
            state,
            _clicks: clicks,
        })
    }

    /// Activate the tab at `index` (document order), exactly as a click would
    pub fn select_tab(&self, index: usize) -> Result<(), UiError> {
        if index >= self.state.tabs.len() {
            return Err(UiError::MissingElement(format!("tab #{}", index)));
        }
        self.state.select_tab(index)
    }

    /// Activate the first tab whose category key is `key`
    pub fn select(&self, key: &str) -> Result<(), UiError> {
        let tab = self
            .state
            .index
            .tab_for(key)
            .ok_or_else(|| UiError::MissingElement(format!("tab for category {:?}", key)))?;
        self.state.select_tab(tab)
    }

    pub fn tab_count(&self) -> usize {
        self.state.index.tab_count()
    }
}
