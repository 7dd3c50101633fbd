//! Browser address bar tests.
//!
//! Run with `wasm-pack test --headless --chrome crates/luxe-pages`.

#![cfg(target_arch = "wasm32")]

use luxe_pages::router::{AddressBar, BrowserAddressBar, Navigator, Route};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
	First,
	Second,
}

impl Route for Tab {
	const ALL: &'static [Self] = &[Tab::First, Tab::Second];
	const DEFAULT: Self = Tab::First;

	fn id(&self) -> &'static str {
		match self {
			Tab::First => "first",
			Tab::Second => "second",
		}
	}
}

#[wasm_bindgen_test]
fn test_set_and_read_fragment() {
	let bar = BrowserAddressBar::new().expect("window");
	bar.set_fragment("second");
	assert_eq!(bar.fragment(), "second");

	bar.replace_fragment("first");
	assert_eq!(bar.fragment(), "first");
}

#[wasm_bindgen_test]
fn test_navigate_updates_location() {
	let navigator: Navigator<Tab, _> =
		Navigator::new(BrowserAddressBar::new().expect("window"));
	let _listener = navigator.listen();

	navigator.navigate("second");
	assert_eq!(navigator.current(), Tab::Second);
	assert_eq!(navigator.address().fragment(), "second");

	navigator.navigate("missing");
	assert_eq!(navigator.current(), Tab::Second);
}
