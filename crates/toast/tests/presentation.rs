use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use tvtoast::{
	ContentView, Host, Position, PresentedToast, Screen, Toast, ToastContent, ToastPhase,
	ToastStyle,
};
use tvtoast_primitives::{Color, Font, FontBook, FontWeight, Rect, SystemFonts, TextStyle};
use tvtoast_text::{AttributedText, RemoteButton, hint_text};

const HOST: Rect = Rect::new(0.0, 0.0, 1920.0, 1080.0);
const FRAME: Rect = Rect::new(0.0, 0.0, 800.0, 140.0);

fn ms(millis: u64) -> Duration {
	Duration::from_millis(millis)
}

fn present(host: &mut Host, style: ToastStyle) -> tvtoast::ToastId {
	Toast::with_style(FRAME, style).content("Hello").present_on(host)
}

#[derive(Debug, Clone, PartialEq)]
enum Event {
	Mounted(Rect),
	Unmounted,
}

#[derive(Debug)]
struct Recorder(Rc<RefCell<Vec<Event>>>);

impl ContentView for Recorder {
	fn mount(&mut self, bounds: Rect) {
		self.0.borrow_mut().push(Event::Mounted(bounds));
	}

	fn unmount(&mut self) {
		self.0.borrow_mut().push(Event::Unmounted);
	}
}

#[test]
fn three_second_toast_lifecycle() {
	let mut host = Host::new(HOST);
	let id = present(&mut host, ToastStyle::new().duration(Duration::from_secs(3)));

	let toast = host.get(id);
	assert_eq!(toast.map(PresentedToast::opacity), Some(0.0));
	assert_eq!(toast.map(PresentedToast::frame), Some(Rect::new(560.0, 920.0, 800.0, 140.0)));

	assert!(host.advance(ms(150)).is_empty());
	assert_eq!(host.phase(id), Some(ToastPhase::Presenting));
	let midway = host.get(id).map(PresentedToast::opacity).unwrap_or_default();
	assert!(midway > 0.0 && midway < 1.0);

	host.advance(ms(150));
	assert_eq!(host.phase(id), Some(ToastPhase::Visible));
	assert_eq!(host.get(id).map(PresentedToast::opacity), Some(1.0));

	host.advance(ms(2699));
	assert_eq!(host.phase(id), Some(ToastPhase::Visible));

	// Fade-out starts exactly `duration` after the fade-in started.
	host.advance(ms(1));
	assert_eq!(host.phase(id), Some(ToastPhase::Dismissing));
	assert_eq!(host.get(id).map(PresentedToast::opacity), Some(1.0));

	assert!(host.advance(ms(299)).is_empty());
	assert_eq!(host.len(), 1);
	assert_eq!(host.phase(id), Some(ToastPhase::Dismissing));

	assert_eq!(host.advance(ms(1)), vec![id]);
	assert!(host.is_empty());
	assert_eq!(host.phase(id), Some(ToastPhase::Removed));
}

#[test]
fn unset_style_resolves_to_defaults_on_presentation() {
	let mut host = Host::new(HOST);
	let id = present(&mut host, ToastStyle::new());

	let style = host.get(id).map(|t| t.style().clone());
	let style = style.as_ref();
	assert_eq!(style.map(|s| s.position), Some(Position::bottom_center(20.0)));
	assert_eq!(style.map(|s| s.duration), Some(Duration::from_secs(3)));
	assert_eq!(style.map(|s| s.background_color), Some(Color::GRAY));
	assert_eq!(style.map(|s| s.corner_radius), Some(10.0));
	assert_eq!(style.map(|s| s.text_color), Some(Color::WHITE));
	assert_eq!(
		style.map(|s| s.font.clone()),
		Some(SystemFonts::new().preferred_font(TextStyle::Headline))
	);
}

#[test]
fn hint_content_wins_when_every_source_is_set() {
	let hint = hint_text!["Press ", RemoteButton::MenuWhite, " to exit"];
	let content = ToastContent::from_sources(
		Some("plain".to_string()),
		Some(AttributedText::styled("rich", Font::system(20.0), Color::RED)),
		Some(hint.clone()),
	);

	let mut host = Host::new(HOST);
	let id = Toast::new(FRAME).content(content).present_on(&mut host);

	let font = Font::system(38.0).with_weight(FontWeight::Semibold);
	let expected = hint.build(&font, Color::WHITE, host.images());
	assert_eq!(
		host.get(id).and_then(PresentedToast::label).map(|l| l.text.clone()),
		Some(expected)
	);
}

#[test]
fn custom_view_is_mounted_and_unmounted() {
	let events = Rc::new(RefCell::new(Vec::new()));
	let mut host = Host::new(HOST);
	let id = Toast::with_style(FRAME, ToastStyle::new().duration(ms(500)))
		.custom(Recorder(Rc::clone(&events)))
		.present_on(&mut host);

	assert_eq!(*events.borrow(), [Event::Mounted(Rect::new(0.0, 0.0, 800.0, 140.0))]);
	assert!(host.get(id).is_some_and(|t| t.label().is_none() && t.content_view().is_some()));

	host.advance(ms(799));
	assert_eq!(events.borrow().len(), 1);

	host.advance(ms(1));
	assert_eq!(
		*events.borrow(),
		[Event::Mounted(Rect::new(0.0, 0.0, 800.0, 140.0)), Event::Unmounted]
	);
}

#[test]
fn toasts_run_independent_timelines() {
	let mut host = Host::new(HOST);
	let short = present(&mut host, ToastStyle::new().duration(ms(1000)));
	host.advance(ms(500));
	let long = present(
		&mut host,
		ToastStyle::new()
			.duration(ms(1000))
			.position(Position::top_right(20.0)),
	);

	assert_eq!(host.toasts().len(), 2);
	assert_eq!(host.phase(short), Some(ToastPhase::Visible));
	assert_eq!(host.phase(long), Some(ToastPhase::Presenting));

	assert_eq!(host.advance(ms(800)), vec![short]);
	assert_eq!(host.phase(long), Some(ToastPhase::Visible));

	assert_eq!(host.advance(ms(500)), vec![long]);
	assert!(host.is_empty());
}

#[test]
fn overlapping_anchors_are_not_stacked() {
	let mut host = Host::new(HOST);
	let a = present(&mut host, ToastStyle::new());
	let b = present(&mut host, ToastStyle::new());
	assert_eq!(
		host.get(a).map(PresentedToast::frame),
		host.get(b).map(PresentedToast::frame)
	);
}

#[test]
fn screen_convenience_presents_on_its_own_host() {
	struct Settings {
		view: Host,
	}

	impl Screen for Settings {
		fn view_mut(&mut self) -> &mut Host {
			&mut self.view
		}
	}

	let mut screen = Settings {
		view: Host::new(HOST),
	};
	let id = screen.present_toast(
		Toast::with_style(FRAME, ToastStyle::new().position(Position::top_center(20.0)))
			.content("Saved"),
	);
	assert_eq!(screen.view.get(id).map(|t| t.frame().top()), Some(20.0));
}
