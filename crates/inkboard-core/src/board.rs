//! Whiteboard session state: the document, per-document undo/redo history,
//! and the mutation operations the UI layer drives.

use crate::element::{Element, ElementId};
use crate::geometry;
use crate::hit_test::{self, DEFAULT_HIT_TOLERANCE};
use crate::page::{Document, Page};
use kurbo::Point;
use std::fmt;

/// Maximum number of undo snapshots to keep.
const MAX_UNDO_HISTORY: usize = 50;

/// Default eraser radius in canvas units.
pub const DEFAULT_ERASER_RADIUS: f64 = 10.0;

type ChangeListener = Box<dyn FnMut() + Send>;

/// Owns a [`Document`] plus the undo/redo stacks and change notification.
///
/// History holds whole element-list snapshots of the active page and is
/// scoped to the document, not to individual pages: adding, deleting, or
/// switching pages clears both stacks, because a snapshot's meaning (which
/// page it restores) is implicit to the page that was active when it was
/// pushed. Any mutation after an undo discards the redo stack.
pub struct Whiteboard {
    document: Document,
    undo_stack: Vec<Vec<Element>>,
    redo_stack: Vec<Vec<Element>>,
    listeners: Vec<ChangeListener>,
}

impl Whiteboard {
    /// A whiteboard over a fresh single-page document.
    pub fn new() -> Self {
        Self::with_document(Document::new())
    }

    /// A whiteboard over an existing document. Structural invariants of
    /// externally produced documents are re-established on adoption.
    pub fn with_document(mut document: Document) -> Self {
        document.normalize();
        Self {
            document,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            listeners: Vec::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Consume the whiteboard, yielding the document for persistence.
    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn current_page(&self) -> &Page {
        self.document.current_page()
    }

    pub fn current_page_index(&self) -> usize {
        self.document.current_page_index
    }

    pub fn page_count(&self) -> usize {
        self.document.page_count()
    }

    /// Elements of the active page in z-order.
    pub fn elements(&self) -> &[Element] {
        &self.document.current_page().elements
    }

    /// Register a hook invoked after every mutating operation. Reactive
    /// bindings in the embedding application subscribe here.
    pub fn observe(&mut self, listener: impl FnMut() + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener();
        }
    }

    // ---- History ----

    /// Snapshot the active page's element list onto the undo stack and
    /// discard any redo state. Called before each mutation.
    fn save_undo_state(&mut self) {
        self.undo_stack
            .push(self.document.current_page().elements.clone());
        self.redo_stack.clear();

        if self.undo_stack.len() > MAX_UNDO_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    /// Restore the most recent snapshot. No-op when the stack is empty.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.undo_stack.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.document.current_page_mut().elements, snapshot);
        self.redo_stack.push(current);
        self.document.touch();
        self.notify();
        true
    }

    /// Inverse of [`Whiteboard::undo`]. No-op when the stack is empty.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.redo_stack.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.document.current_page_mut().elements, snapshot);
        self.undo_stack.push(current);
        self.document.touch();
        self.notify();
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Current undo stack depth.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    fn clear_history(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    // ---- Element operations ----

    /// Append an element to the active page.
    pub fn add_element(&mut self, element: Element) {
        self.save_undo_state();
        self.document.current_page_mut().elements.push(element);
        self.document.touch();
        self.notify();
    }

    /// Remove the element with the given id, if present.
    pub fn remove_element(&mut self, id: ElementId) {
        self.save_undo_state();
        self.document
            .current_page_mut()
            .elements
            .retain(|element| element.id() != id);
        self.document.touch();
        self.notify();
    }

    /// Remove every element whose bounding rectangle intersects the square
    /// region of side `2 * radius` centered at `point`.
    ///
    /// A snapshot is pushed only when at least one element is removed, so a
    /// miss never pollutes history.
    pub fn erase_at(&mut self, point: Point, radius: f64) {
        let region = geometry::region_around(point, radius);
        let doomed: Vec<ElementId> = self
            .document
            .current_page()
            .elements
            .iter()
            .filter(|element| element.bounding_rect().intersect(region).area() > 0.0)
            .map(Element::id)
            .collect();

        if doomed.is_empty() {
            return;
        }

        self.save_undo_state();
        self.document
            .current_page_mut()
            .elements
            .retain(|element| !doomed.contains(&element.id()));
        log::debug!("erased {} element(s)", doomed.len());
        self.document.touch();
        self.notify();
    }

    /// Empty the active page.
    pub fn clear(&mut self) {
        self.save_undo_state();
        self.document.current_page_mut().clear();
        self.document.touch();
        self.notify();
    }

    /// Topmost element under `point`, using the default hit tolerance.
    pub fn element_at(&self, point: Point) -> Option<&Element> {
        hit_test::hit_test(point, self.elements(), DEFAULT_HIT_TOLERANCE)
    }

    // ---- Page operations ----

    /// Append a new page inheriting the current background, and make it
    /// active. History does not span page boundaries.
    pub fn add_page(&mut self) {
        let label = format!("Page {}", self.document.page_count() + 1);
        let background = self.document.current_page().background_color;
        self.document
            .pages
            .push(Page::with_background(label, background));
        self.document.current_page_index = self.document.page_count() - 1;
        self.clear_history();
        self.document.touch();
        self.notify();
    }

    /// Delete the page at `index`. Refused when it would leave zero pages
    /// or the index is out of range. The active index is re-clamped.
    pub fn delete_page(&mut self, index: usize) -> bool {
        if self.document.page_count() <= 1 || index >= self.document.page_count() {
            log::debug!("refused page deletion at index {index}");
            return false;
        }
        self.document.pages.remove(index);
        if self.document.current_page_index >= self.document.page_count() {
            self.document.current_page_index = self.document.page_count() - 1;
        }
        self.clear_history();
        self.document.touch();
        self.notify();
        true
    }

    /// Make the page at `index` active. Out-of-range indices are ignored.
    pub fn switch_to_page(&mut self, index: usize) -> bool {
        if index >= self.document.page_count() {
            return false;
        }
        self.document.current_page_index = index;
        self.clear_history();
        self.document.touch();
        self.notify();
        true
    }
}

impl Default for Whiteboard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Whiteboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Whiteboard")
            .field("document", &self.document)
            .field("undo_depth", &self.undo_stack.len())
            .field("redo_depth", &self.redo_stack.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Shape, ShapeKind, Stroke, StrokePoint};
    use kurbo::Size;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn three_point_stroke() -> Element {
        let mut stroke = Stroke::from_points(vec![
            StrokePoint::plain(Point::new(0.0, 0.0)),
            StrokePoint::plain(Point::new(10.0, 10.0)),
            StrokePoint::plain(Point::new(20.0, 5.0)),
        ]);
        stroke.line_width = 4.0;
        Element::Stroke(stroke)
    }

    fn rect_shape(x: f64, y: f64, w: f64, h: f64) -> Element {
        let mut shape = Shape::new(ShapeKind::Rectangle, Point::new(x, y));
        shape.size = Size::new(w, h);
        Element::Shape(shape)
    }

    #[test]
    fn test_add_undo_redo_cycle() {
        let mut board = Whiteboard::new();
        let element = three_point_stroke();
        board.add_element(element.clone());
        assert_eq!(board.elements().len(), 1);

        assert!(board.undo());
        assert_eq!(board.elements().len(), 0);

        assert!(board.redo());
        assert_eq!(board.elements().len(), 1);
        assert_eq!(board.elements()[0], element);
    }

    #[test]
    fn test_undo_redo_restore_across_k_mutations() {
        let mut board = Whiteboard::new();
        for i in 0..5 {
            board.add_element(rect_shape(i as f64 * 10.0, 0.0, 5.0, 5.0));
        }
        let final_state = board.elements().to_vec();

        for _ in 0..5 {
            assert!(board.undo());
        }
        assert!(board.elements().is_empty());
        assert!(!board.undo());

        for _ in 0..5 {
            assert!(board.redo());
        }
        assert_eq!(board.elements(), final_state.as_slice());
    }

    #[test]
    fn test_mutation_after_undo_discards_redo() {
        let mut board = Whiteboard::new();
        board.add_element(rect_shape(0.0, 0.0, 10.0, 10.0));
        assert!(board.undo());
        assert!(board.can_redo());

        board.add_element(rect_shape(50.0, 50.0, 10.0, 10.0));
        assert!(!board.can_redo());
        assert!(!board.redo());
    }

    #[test]
    fn test_remove_element() {
        let mut board = Whiteboard::new();
        let element = rect_shape(0.0, 0.0, 10.0, 10.0);
        let id = element.id();
        board.add_element(element);

        board.remove_element(id);
        assert!(board.elements().is_empty());

        assert!(board.undo());
        assert_eq!(board.elements().len(), 1);
    }

    #[test]
    fn test_erase_hit_pushes_one_snapshot() {
        let mut board = Whiteboard::new();
        board.add_element(rect_shape(0.0, 0.0, 20.0, 20.0));
        let depth = board.undo_depth();

        board.erase_at(Point::new(10.0, 10.0), DEFAULT_ERASER_RADIUS);
        assert!(board.elements().is_empty());
        assert_eq!(board.undo_depth(), depth + 1);
    }

    #[test]
    fn test_erase_miss_leaves_history_untouched() {
        let mut board = Whiteboard::new();
        board.add_element(rect_shape(0.0, 0.0, 20.0, 20.0));
        let depth = board.undo_depth();

        board.erase_at(Point::new(500.0, 500.0), DEFAULT_ERASER_RADIUS);
        assert_eq!(board.elements().len(), 1);
        assert_eq!(board.undo_depth(), depth);
    }

    #[test]
    fn test_clear() {
        let mut board = Whiteboard::new();
        board.add_element(rect_shape(0.0, 0.0, 10.0, 10.0));
        board.add_element(rect_shape(20.0, 20.0, 10.0, 10.0));

        board.clear();
        assert!(board.elements().is_empty());

        assert!(board.undo());
        assert_eq!(board.elements().len(), 2);
    }

    #[test]
    fn test_undo_empty_stack_is_noop() {
        let mut board = Whiteboard::new();
        assert!(!board.can_undo());
        assert!(!board.undo());
        assert!(!board.can_redo());
        assert!(!board.redo());
    }

    #[test]
    fn test_history_depth_cap() {
        let mut board = Whiteboard::new();
        for i in 0..60 {
            board.add_element(rect_shape(i as f64, 0.0, 1.0, 1.0));
        }
        assert_eq!(board.undo_depth(), 50);
    }

    #[test]
    fn test_add_page_switches_and_clears_history() {
        let mut board = Whiteboard::new();
        board.add_element(rect_shape(0.0, 0.0, 10.0, 10.0));
        assert!(board.can_undo());

        board.add_page();
        assert_eq!(board.page_count(), 2);
        assert_eq!(board.current_page_index(), 1);
        assert_eq!(board.current_page().label, "Page 2");
        assert!(!board.can_undo());
        assert!(board.current_page().is_empty());
    }

    #[test]
    fn test_delete_last_page_refused() {
        let mut board = Whiteboard::new();
        assert!(!board.delete_page(0));
        assert_eq!(board.page_count(), 1);
    }

    #[test]
    fn test_delete_active_page_reclamps_index() {
        let mut board = Whiteboard::new();
        board.add_page();
        board.add_page();
        assert_eq!(board.current_page_index(), 2);

        assert!(board.delete_page(2));
        assert_eq!(board.page_count(), 2);
        assert_eq!(board.current_page_index(), 1);
    }

    #[test]
    fn test_switch_to_page_out_of_range_ignored() {
        let mut board = Whiteboard::new();
        assert!(!board.switch_to_page(3));
        assert_eq!(board.current_page_index(), 0);
    }

    #[test]
    fn test_switch_clears_history() {
        let mut board = Whiteboard::new();
        board.add_page();
        board.add_element(rect_shape(0.0, 0.0, 10.0, 10.0));
        assert!(board.can_undo());

        assert!(board.switch_to_page(0));
        assert!(!board.can_undo());
        assert!(!board.can_redo());
    }

    #[test]
    fn test_element_at_prefers_topmost() {
        let mut board = Whiteboard::new();
        board.add_element(rect_shape(0.0, 0.0, 100.0, 100.0));
        let top = rect_shape(50.0, 50.0, 100.0, 100.0);
        let top_id = top.id();
        board.add_element(top);

        let hit = board.element_at(Point::new(75.0, 75.0)).unwrap();
        assert_eq!(hit.id(), top_id);
    }

    #[test]
    fn test_observers_fire_on_mutation() {
        let counter = Arc::new(AtomicUsize::new(0));
        let observed = Arc::clone(&counter);

        let mut board = Whiteboard::new();
        board.observe(move || {
            observed.fetch_add(1, Ordering::SeqCst);
        });

        board.add_element(rect_shape(0.0, 0.0, 10.0, 10.0));
        board.undo();
        board.add_page();
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_modified_at_advances() {
        let mut board = Whiteboard::new();
        let before = board.document().modified_at;
        board.add_element(rect_shape(0.0, 0.0, 10.0, 10.0));
        assert!(board.document().modified_at >= before);
    }

    #[test]
    fn test_with_document_normalizes() {
        let mut doc = Document::new();
        doc.current_page_index = 9;
        let board = Whiteboard::with_document(doc);
        assert_eq!(board.current_page_index(), 0);
    }
}
