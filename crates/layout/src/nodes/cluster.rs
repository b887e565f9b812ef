use super::Node;
use super::hlist::HList;

/// A nucleus with its subscript and superscript, kept as one horizontal unit.
///
/// The cluster packs and ships exactly like the `HList` it wraps; it exists so
/// script material can be recognised and re-laid out as a group.
#[derive(Debug, Clone, Default)]
pub struct SubSuperCluster {
    hlist: HList,
}

impl SubSuperCluster {
    pub fn new(hlist: HList) -> Self {
        Self { hlist }
    }

    /// Kerns and packs `elements` into a new cluster.
    pub fn of(elements: Vec<Node>) -> Self {
        Self::new(HList::new(elements, true))
    }

    pub fn hlist(&self) -> &HList {
        &self.hlist
    }

    pub fn hlist_mut(&mut self) -> &mut HList {
        &mut self.hlist
    }

    pub fn into_hlist(self) -> HList {
        self.hlist
    }

    pub fn width(&self) -> f64 {
        self.hlist.width()
    }

    pub fn height(&self) -> f64 {
        self.hlist.height()
    }

    pub fn depth(&self) -> f64 {
        self.hlist.depth()
    }

    pub fn shrink(&mut self) {
        self.hlist.shrink();
    }

    pub fn grow(&mut self) {
        self.hlist.grow();
    }
}
