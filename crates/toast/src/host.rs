//! The surface toasts are attached to.

use std::fmt;
use std::time::Duration;

use tvtoast_primitives::{FontBook, ImageBundle, Rect, StaticBundle, SystemFonts};

use crate::timeline::ToastPhase;
use crate::toast::{PresentedToast, Toast, ToastId};

/// A host surface: its bounds, the platform lookups used while presenting,
/// and the toasts currently attached to it.
///
/// Toasts are kept in attach order, which is also their stacking order.
/// Each runs its own timeline; nothing coordinates or stacks them.
pub struct Host {
	bounds: Rect,
	fonts: Box<dyn FontBook>,
	images: Box<dyn ImageBundle>,
	toasts: Vec<PresentedToast>,
	next_id: u64,
}

impl Host {
	/// A host with system fonts and an empty image bundle.
	pub fn new(bounds: Rect) -> Self {
		Self {
			bounds,
			fonts: Box::new(SystemFonts::new()),
			images: Box::new(StaticBundle::new()),
			toasts: Vec::new(),
			next_id: 0,
		}
	}

	#[must_use]
	pub fn with_fonts(mut self, fonts: impl FontBook + 'static) -> Self {
		self.fonts = Box::new(fonts);
		self
	}

	#[must_use]
	pub fn with_images(mut self, images: impl ImageBundle + 'static) -> Self {
		self.images = Box::new(images);
		self
	}

	pub fn bounds(&self) -> Rect {
		self.bounds
	}

	/// Resizes the host. Attached toasts keep their frames.
	pub fn set_bounds(&mut self, bounds: Rect) {
		self.bounds = bounds;
	}

	pub fn fonts(&self) -> &dyn FontBook {
		self.fonts.as_ref()
	}

	pub fn images(&self) -> &dyn ImageBundle {
		self.images.as_ref()
	}

	/// Presents `toast` on this host.
	pub fn present(&mut self, toast: Toast) -> ToastId {
		toast.present_on(self)
	}

	/// Display refresh: advances every attached toast by `delta`.
	///
	/// Toasts whose fade-out completed are detached; their ids are returned
	/// in stacking order.
	pub fn advance(&mut self, delta: Duration) -> Vec<ToastId> {
		let mut removed = Vec::new();
		self.toasts.retain_mut(|toast| {
			let before = toast.phase();
			let after = toast.timeline.advance(delta);
			if before < ToastPhase::Dismissing && after >= ToastPhase::Dismissing {
				tracing::trace!(id = %toast.id(), "toast.fade_out");
			}
			if after == ToastPhase::Removed {
				toast.detach();
				removed.push(toast.id());
				return false;
			}
			true
		});
		removed
	}

	/// Attached toasts, bottom-most first.
	pub fn toasts(&self) -> &[PresentedToast] {
		&self.toasts
	}

	pub fn get(&self, id: ToastId) -> Option<&PresentedToast> {
		self.toasts.iter().find(|toast| toast.id() == id)
	}

	/// Phase of a toast presented on this host.
	///
	/// Detached toasts report [`ToastPhase::Removed`]; ids this host never
	/// issued report `None`.
	pub fn phase(&self, id: ToastId) -> Option<ToastPhase> {
		match self.get(id) {
			Some(toast) => Some(toast.phase()),
			None if id.0 < self.next_id => Some(ToastPhase::Removed),
			None => None,
		}
	}

	pub fn len(&self) -> usize {
		self.toasts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.toasts.is_empty()
	}

	pub(crate) fn issue_id(&mut self) -> ToastId {
		let id = ToastId(self.next_id);
		self.next_id += 1;
		id
	}

	pub(crate) fn attach(&mut self, toast: PresentedToast) {
		self.toasts.push(toast);
	}
}

impl fmt::Debug for Host {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Host")
			.field("bounds", &self.bounds)
			.field("toasts", &self.toasts)
			.field("next_id", &self.next_id)
			.finish_non_exhaustive()
	}
}

/// A screen-level container that owns a host surface.
///
/// Implementors get [`Screen::present_toast`] for presenting onto their own
/// display area.
pub trait Screen {
	fn view_mut(&mut self) -> &mut Host;

	fn present_toast(&mut self, toast: Toast) -> ToastId {
		toast.present_on(self.view_mut())
	}
}

impl Screen for Host {
	fn view_mut(&mut self) -> &mut Host {
		self
	}
}
