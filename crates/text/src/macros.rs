/// Creates a [`HintText`](crate::HintText) from a mixed list of strings and
/// [`RemoteButton`](crate::RemoteButton)s.
///
/// Each argument is converted with [`HintElement::from`](crate::HintElement),
/// so anything convertible into a hint element is accepted.
///
/// ```
/// use tvtoast_text::{RemoteButton, hint_text};
///
/// let hint = hint_text!["Press ", RemoteButton::MenuWhite, " to exit"];
/// assert_eq!(hint.elements().len(), 3);
///
/// let empty = hint_text![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! hint_text {
	() => {
		$crate::HintText::default()
	};
	($($element:expr),+ $(,)?) => {
		$crate::HintText::new([$($crate::HintElement::from($element)),+])
	};
}
