// SPDX-License-Identifier: MPL-2.0
//! Mount surfaces.
//!
//! A [`Surface`] is the element the viewer renders into: a fixed-size box
//! whose background is the sprite sheet, shifted so one frame is visible.
//! Hosts implement it over whatever they render with (a DOM element, a
//! widget, a texture quad). [`MemorySurface`] is a headless implementation
//! that records every call.

use crate::domain::sprite::FrameOffset;

/// Handle for a pointer listener registered on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Element the viewer mounts on.
///
/// The viewer only ever touches the element's size, its background and its
/// own pointer listener.
pub trait Surface {
    /// Sizes the element to exactly one frame.
    fn set_size(&mut self, width: u32, height: u32);

    /// Sets the sprite sheet as the element's background image.
    fn set_background_image(&mut self, url: &str);

    /// Shifts the background so the frame at `offset` is visible.
    fn set_background_position(&mut self, offset: FrameOffset);

    /// Starts routing press, move, release and leave events to the viewer.
    fn subscribe(&mut self) -> ListenerId;

    /// Stops routing events for `listener`.
    fn unsubscribe(&mut self, listener: ListenerId);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn set_size(&mut self, width: u32, height: u32) {
        (**self).set_size(width, height);
    }

    fn set_background_image(&mut self, url: &str) {
        (**self).set_background_image(url);
    }

    fn set_background_position(&mut self, offset: FrameOffset) {
        (**self).set_background_position(offset);
    }

    fn subscribe(&mut self) -> ListenerId {
        (**self).subscribe()
    }

    fn unsubscribe(&mut self, listener: ListenerId) {
        (**self).unsubscribe(listener);
    }
}

/// A call made on a [`MemorySurface`], in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    SetSize { width: u32, height: u32 },
    SetBackgroundImage(String),
    SetBackgroundPosition(FrameOffset),
    Subscribe(ListenerId),
    Unsubscribe(ListenerId),
}

/// Headless surface that keeps its style in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySurface {
    size: Option<(u32, u32)>,
    background_image: Option<String>,
    background_position: FrameOffset,
    listeners: Vec<ListenerId>,
    next_listener: u64,
    calls: Vec<SurfaceCall>,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn size(&self) -> Option<(u32, u32)> {
        self.size
    }

    #[must_use]
    pub fn background_image(&self) -> Option<&str> {
        self.background_image.as_deref()
    }

    #[must_use]
    pub fn background_position(&self) -> FrameOffset {
        self.background_position
    }

    /// Listeners currently registered.
    #[must_use]
    pub fn listeners(&self) -> &[ListenerId] {
        &self.listeners
    }

    /// Every call received so far.
    #[must_use]
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Background positions in the order they were applied.
    pub fn position_updates(&self) -> impl Iterator<Item = FrameOffset> + '_ {
        self.calls.iter().filter_map(|call| match call {
            SurfaceCall::SetBackgroundPosition(offset) => Some(*offset),
            _ => None,
        })
    }

    /// Renders the element's inline style.
    ///
    /// `position: relative` lets the drag hint overlay sit on top.
    #[must_use]
    pub fn inline_style(&self) -> String {
        let mut style = String::new();
        if let Some((width, height)) = self.size {
            style.push_str(&format!("height:{}px; width:{}px; ", height, width));
        }
        if let Some(url) = &self.background_image {
            style.push_str(&format!("background-image: url({}); ", url));
        }
        style.push_str(&format!(
            "background-position: {}; position: relative;",
            self.background_position.to_css()
        ));
        style
    }
}

impl Surface for MemorySurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.size = Some((width, height));
        self.calls.push(SurfaceCall::SetSize { width, height });
    }

    fn set_background_image(&mut self, url: &str) {
        self.background_image = Some(url.to_string());
        self.calls
            .push(SurfaceCall::SetBackgroundImage(url.to_string()));
    }

    fn set_background_position(&mut self, offset: FrameOffset) {
        self.background_position = offset;
        self.calls.push(SurfaceCall::SetBackgroundPosition(offset));
    }

    fn subscribe(&mut self) -> ListenerId {
        let listener = ListenerId::new(self.next_listener);
        self.next_listener += 1;
        self.listeners.push(listener);
        self.calls.push(SurfaceCall::Subscribe(listener));
        listener
    }

    fn unsubscribe(&mut self, listener: ListenerId) {
        self.listeners.retain(|id| *id != listener);
        self.calls.push(SurfaceCall::Unsubscribe(listener));
    }
}
