use signal::Signal;

/// What the deck needs from each concrete control panel. Concrete panels
/// own their toolkit widgets; the deck only drives title lookup and the
/// enter/exit transitions around selection changes.
pub trait Panel {
    fn title(&self) -> &str;
    /// Called when the panel becomes the selected one.
    fn enter(&mut self);
    /// Called when the panel stops being the selected one.
    fn exit(&mut self);
}

/// Owns a fixed set of panels and the current selection, announcing
/// activations by index on a signal.
pub struct PanelDeck {
    panels: Vec<Box<dyn Panel>>,
    selected: Option<usize>,
    activated: Signal<usize>,
}

impl PanelDeck {
    /// The first panel is selected and entered by default, matching the
    /// deck showing its first entry on creation.
    pub fn new(mut panels: Vec<Box<dyn Panel>>) -> Self {
        let selected = if panels.is_empty() { None } else { Some(0) };
        if let Some(panel) = panels.first_mut() {
            panel.enter();
        }
        Self {
            panels,
            selected,
            activated: Signal::new(),
        }
    }

    /// Exact-title lookup; `None` when no panel carries the title.
    pub fn get(&self, title: &str) -> Option<(usize, &dyn Panel)> {
        self.panels
            .iter()
            .position(|panel| panel.title() == title)
            .map(|index| (index, self.panels[index].as_ref()))
    }

    /// Switches the selection to the named panel, exiting the previous
    /// one, and emits the new index. Reactivating the selected panel only
    /// re-announces it. Unknown titles change nothing.
    pub fn activate(&mut self, title: &str) -> bool {
        let Some(next) = self
            .panels
            .iter()
            .position(|panel| panel.title() == title)
        else {
            return false;
        };

        if self.selected != Some(next) {
            if let Some(current) = self.selected {
                self.panels[current].exit();
            }
            self.panels[next].enter();
            self.selected = Some(next);
        }
        self.activated.emit(next);
        true
    }

    pub fn selected(&self) -> Option<&dyn Panel> {
        self.selected.map(|index| self.panels[index].as_ref())
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The activation signal, for collaborators to connect slots to.
    pub fn activated(&mut self) -> &mut Signal<usize> {
        &mut self.activated
    }

    pub fn titles(&self) -> Vec<&str> {
        self.panels.iter().map(|panel| panel.title()).collect()
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}
