//! Headless scene graph and recording text surface

use std::cell::RefCell;
use std::rc::Rc;

use murmur_core::{Host, Layout, Surface};

use crate::measure::FontMetrics;

type SharedFontMetrics = Rc<RefCell<FontMetrics>>;

/// Scene node id handed out on attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

/// Tracks which surfaces are attached to the host scene.
///
/// The scene holds only ids; surface ownership stays with the message
/// window that opened it.
#[derive(Debug, Default)]
pub struct Scene {
    next_id: u64,
    attached: Vec<NodeId>,
}

impl Scene {
    /// Attach a new node and return its id.
    pub fn attach(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.attached.push(id);
        log::debug!("scene node {:?} attached", id);
        id
    }

    /// Detach a previously attached node.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(index) = self.attached.iter().position(|&node| node == id) {
            self.attached.remove(index);
            log::debug!("scene node {:?} detached", id);
        } else {
            log::warn!("scene node {:?} was not attached", id);
        }
    }

    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }
}

/// One glyph drawn onto a surface, in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawnGlyph {
    pub glyph: char,
    pub x: f32,
    pub y: f32,
}

/// A text surface that records drawn glyphs and measures through the
/// host's shared [`FontMetrics`].
pub struct TextSurface {
    node: NodeId,
    layout: Layout,
    metrics: SharedFontMetrics,
    drawn: Vec<DrawnGlyph>,
}

impl TextSurface {
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Glyphs drawn so far, in reveal order.
    pub fn drawn(&self) -> &[DrawnGlyph] {
        &self.drawn
    }
}

impl Surface for TextSurface {
    fn clear(&mut self) {
        self.drawn.clear();
    }

    fn glyph_width(&mut self, glyph: char) -> f32 {
        self.metrics.borrow_mut().glyph_width(glyph)
    }

    fn line_height(&self) -> f32 {
        self.metrics.borrow().line_height()
    }

    fn draw_glyph(&mut self, glyph: char, x: f32, y: f32) {
        self.drawn.push(DrawnGlyph { glyph, x, y });
    }
}

/// Host implementation with a fixed screen size and a headless scene.
pub struct HeadlessHost {
    screen: (u32, u32),
    scene: Scene,
    metrics: SharedFontMetrics,
}

impl HeadlessHost {
    pub fn new(screen_width: u32, screen_height: u32, metrics: FontMetrics) -> Self {
        Self {
            screen: (screen_width, screen_height),
            scene: Scene::default(),
            metrics: Rc::new(RefCell::new(metrics)),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}

impl Host for HeadlessHost {
    type Surface = TextSurface;

    fn screen_size(&self) -> (u32, u32) {
        self.screen
    }

    fn open(&mut self, layout: &Layout) -> TextSurface {
        let node = self.scene.attach();
        TextSurface {
            node,
            layout: *layout,
            metrics: Rc::clone(&self.metrics),
            drawn: Vec::new(),
        }
    }

    fn close(&mut self, surface: TextSurface) {
        self.scene.detach(surface.node);
    }
}
