use leptos::prelude::*;

/// Per-dashboard layout state, provided by `Shell`
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
    /// Ids of the expanded sidebar groups
    pub expanded_groups: RwSignal<Vec<&'static str>>,
}

impl AppGlobalContext {
    pub fn new(expanded: Vec<&'static str>) -> Self {
        Self {
            left_open: RwSignal::new(true),
            expanded_groups: RwSignal::new(expanded),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    pub fn toggle_group(&self, id: &'static str) {
        self.expanded_groups.update(|groups| toggle_entry(groups, id));
    }
}

/// Layout context of the current dashboard
pub fn use_layout() -> AppGlobalContext {
    use_context::<AppGlobalContext>().unwrap_or_else(|| AppGlobalContext::new(Vec::new()))
}

fn toggle_entry(groups: &mut Vec<&'static str>, id: &'static str) {
    if let Some(pos) = groups.iter().position(|g| *g == id) {
        groups.remove(pos);
    } else {
        groups.push(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_entry() {
        let mut groups = vec!["catalog"];
        toggle_entry(&mut groups, "sales");
        assert_eq!(groups, vec!["catalog", "sales"]);
        toggle_entry(&mut groups, "catalog");
        assert_eq!(groups, vec!["sales"]);
    }
}
