//! Decorator chains: a label wrapped in any number of borders.

use super::base::Label;
use super::decorator::{DecoratorKind, Theme};
use crate::draw::Canvas;

/// One link of a decoration chain.
///
/// A chain always ends in exactly one [`Label`]. Every `Decorated` link owns
/// the layer it wraps, so chains can neither share labels nor form cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    /// Bare label, depth 0
    Base(Label),
    /// Border drawn around everything in `inner`
    Decorated {
        /// Effect added by this link
        kind: DecoratorKind,
        /// Wrapped layer, drawn first
        inner: Box<Layer>,
    },
}

impl From<Label> for Layer {
    fn from(label: Label) -> Self {
        Layer::Base(label)
    }
}

impl Layer {
    /// Wraps this layer in a new outermost border.
    pub fn wrap(self, kind: DecoratorKind) -> Layer {
        Layer::Decorated {
            kind,
            inner: Box::new(self),
        }
    }

    /// Removes the outermost border.
    ///
    /// Returns the removed kind together with the layer it wrapped. A bare
    /// label cannot be unwrapped and is handed back unchanged as `Err`.
    pub fn peel(self) -> Result<(DecoratorKind, Layer), Layer> {
        match self {
            Layer::Decorated { kind, inner } => Ok((kind, *inner)),
            base @ Layer::Base(_) => Err(base),
        }
    }

    /// Returns the label at the root of the chain.
    pub fn base(&self) -> &Label {
        let mut layer = self;
        loop {
            match layer {
                Layer::Base(label) => return label,
                Layer::Decorated { inner, .. } => layer = &**inner,
            }
        }
    }

    /// Layer directly wrapped by this one, if any.
    pub fn inner(&self) -> Option<&Layer> {
        match self {
            Layer::Base(_) => None,
            Layer::Decorated { inner, .. } => Some(&**inner),
        }
    }

    /// Outermost border kind, if any.
    pub fn outer_kind(&self) -> Option<DecoratorKind> {
        match self {
            Layer::Base(_) => None,
            Layer::Decorated { kind, .. } => Some(*kind),
        }
    }

    /// Number of borders wrapped around the label.
    pub fn depth(&self) -> usize {
        self.kinds().count()
    }

    /// Border kinds from the outermost to the innermost.
    pub fn kinds(&self) -> impl Iterator<Item = DecoratorKind> + '_ {
        std::iter::successors(Some(self), |layer| layer.inner()).filter_map(Layer::outer_kind)
    }

    /// Draws the whole chain: the label text first, then every border from
    /// the innermost to the outermost.
    pub fn draw(&self, canvas: &mut dyn Canvas, theme: &Theme) {
        match self {
            Layer::Base(label) => label.draw(canvas, &theme.text),
            Layer::Decorated { kind, inner } => {
                inner.draw(canvas, theme);
                let base = inner.base();
                kind.draw_around(canvas, base.x, base.y, theme);
            }
        }
    }
}
