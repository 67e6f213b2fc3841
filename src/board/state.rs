use crate::draw::Canvas;
use crate::label::{DecoratorKind, Label, Layer, Theme};
use log::{debug, info, warn};

/// Label registry: one decoration chain per on-screen slot plus the current selection.
///
/// All mutations go through [`select`](Self::select),
/// [`add_decorator`](Self::add_decorator) and
/// [`remove_last_decorator`](Self::remove_last_decorator). Invalid requests
/// leave the board untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    slots: Vec<Layer>,
    selected: Option<usize>,
}

impl Board {
    /// Creates a board with one bare label per slot and nothing selected.
    pub fn new(labels: impl IntoIterator<Item = Label>) -> Self {
        Self {
            slots: labels.into_iter().map(Layer::from).collect(),
            selected: None,
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the board has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Current outermost layer of a slot.
    pub fn slot(&self, index: usize) -> Option<&Layer> {
        self.slots.get(index)
    }

    /// All slots in display order.
    pub fn slots(&self) -> &[Layer] {
        &self.slots
    }

    /// Index of the selected slot, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Base label of the selected slot, if any.
    pub fn selected_label(&self) -> Option<&Label> {
        self.selected
            .and_then(|index| self.slots.get(index))
            .map(Layer::base)
    }

    /// Selects a slot.
    ///
    /// Returns `false` and keeps the previous selection if `index` is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(layer) = self.slots.get(index) else {
            warn!(
                "Ignoring selection of slot {} (board has {} slots)",
                index,
                self.slots.len()
            );
            return false;
        };

        info!("Selected label: {}", layer.base().text);
        self.selected = Some(index);
        true
    }

    /// Clears the selection.
    pub fn deselect(&mut self) {
        if self.selected.take().is_some() {
            info!("Selection cleared");
        }
    }

    /// Wraps the selected slot in a new outermost border.
    ///
    /// Returns `false` when nothing is selected.
    pub fn add_decorator(&mut self, kind: DecoratorKind) -> bool {
        let Some(slot) = self.selected_slot_mut() else {
            debug!("No label selected, ignoring {} request", kind.describe());
            return false;
        };

        replace_with(slot, |layer| layer.wrap(kind));
        info!("{} added", kind.describe());
        true
    }

    /// Removes the outermost border of the selected slot.
    ///
    /// Returns the removed kind, or `None` when nothing is selected or the
    /// slot already holds a bare label.
    pub fn remove_last_decorator(&mut self) -> Option<DecoratorKind> {
        let Some(slot) = self.selected_slot_mut() else {
            debug!("No label selected, nothing to remove");
            return None;
        };

        let mut removed = None;
        replace_with(slot, |layer| match layer.peel() {
            Ok((kind, inner)) => {
                removed = Some(kind);
                inner
            }
            Err(bare) => bare,
        });

        match removed {
            Some(kind) => info!("Removed last border ({})", kind.describe()),
            None => debug!("Selected label has no borders to remove"),
        }
        removed
    }

    /// Draws every slot once, in display order.
    pub fn draw(&self, canvas: &mut dyn Canvas, theme: &Theme) {
        for layer in &self.slots {
            layer.draw(canvas, theme);
        }
    }

    fn selected_slot_mut(&mut self) -> Option<&mut Layer> {
        self.selected.and_then(|index| self.slots.get_mut(index))
    }
}

/// Replaces `slot` with `f(old value)`.
///
/// The slot briefly holds a placeholder label while `f` runs; `f` cannot
/// observe it.
fn replace_with(slot: &mut Layer, f: impl FnOnce(Layer) -> Layer) {
    let old = std::mem::replace(slot, Layer::Base(Label::new(String::new(), 0.0, 0.0)));
    *slot = f(old);
}
