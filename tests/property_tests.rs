//! Property-Based Tests for the menu engine
//!
//! Uses proptest for testing invariants:
//! - Navigation tokens are accepted on the first attempt
//! - Invalid input produces exactly one notice per line
//! - Rendered rows keep the fixed line width

mod common;

use common::Root;
use kiauh::ui::{self, LINE_WIDTH};
use kiauh::{
    Console, EngineConfig, FooterKind, MenuHandle, Navigator, OptionTable, OptionTarget, Palette,
    Result, into_handle,
};
use proptest::prelude::*;
use std::io::Cursor;
use unicode_width::UnicodeWidthStr;

fn footer_strategy() -> impl Strategy<Value = FooterKind> {
    prop_oneof![
        Just(FooterKind::Quit),
        Just(FooterKind::Back),
        Just(FooterKind::BackHelp),
    ]
}

fn menu_with_footer(footer: FooterKind) -> MenuHandle {
    fn noop(_: &mut Root, _: &mut Console<'_>, _: &str) {}
    into_handle(Root::new(
        footer,
        OptionTable::new()
            .with("1", OptionTarget::action(noop))
            .with("2", OptionTarget::action(noop)),
    ))
}

/// Run one validated read and return the token plus captured output.
fn read_token(menu: &MenuHandle, input: &str) -> (Result<String>, String) {
    let mut out = Vec::new();
    let result = {
        let console = Console::new(Cursor::new(input.to_string()), &mut out, Palette::plain());
        let mut navigator = Navigator::new(console, &EngineConfig::default());
        navigator.read_validated_input(&*menu.borrow())
    };
    (result, String::from_utf8(out).unwrap())
}

fn is_known(footer: FooterKind, token: &str) -> bool {
    footer.is_navigation_token(token) || token == "1" || token == "2"
}

proptest! {
    /// Every navigation token of a footer is returned without re-prompting
    #[test]
    fn navigation_tokens_accepted_immediately(
        footer in footer_strategy(),
        index in 0usize..3,
        upper in any::<bool>(),
    ) {
        let tokens = footer.navigation_tokens();
        let token = tokens[index % tokens.len()];
        let typed = if upper { token.to_uppercase() } else { token.to_string() };

        let menu = menu_with_footer(footer);
        let (result, out) = read_token(&menu, &format!("{typed}\n"));

        prop_assert_eq!(result.unwrap(), token);
        prop_assert!(!out.contains("Invalid input!"));
        prop_assert_eq!(out.matches("###### Perform action: ").count(), 1);
    }

    /// N invalid lines followed by a valid one yield exactly N notices
    #[test]
    fn one_notice_per_invalid_line(
        footer in footer_strategy(),
        invalid in prop::collection::vec("[a-z0-9]{0,4}", 0..8),
    ) {
        let invalid: Vec<String> = invalid
            .into_iter()
            .filter(|t| !is_known(footer, t))
            .collect();
        let mut input = String::new();
        for token in &invalid {
            input.push_str(token);
            input.push('\n');
        }
        input.push_str("2\n");

        let menu = menu_with_footer(footer);
        let (result, out) = read_token(&menu, &input);

        prop_assert_eq!(result.unwrap(), "2");
        prop_assert_eq!(out.matches("Invalid input!").count(), invalid.len());
        prop_assert_eq!(out.matches("###### Perform action: ").count(), invalid.len() + 1);
    }

    /// A configured default resolves any unknown line on the first attempt
    #[test]
    fn default_resolves_unknown_input(line in "[a-z]{0,3}") {
        prop_assume!(!is_known(FooterKind::Quit, &line));
        let mut root = Root::new(FooterKind::Quit, OptionTable::new());
        root.base.default_option = Some("2".to_string());
        let menu = into_handle(root);

        let (result, out) = read_token(&menu, &format!("{line}\n"));

        prop_assert_eq!(result.unwrap(), "2");
        prop_assert!(!out.contains("Invalid input!"));
    }

    /// Option rows stay aligned with the header for any short label
    #[test]
    fn option_rows_have_line_width(label in "[ -~]{0,40}", number in 0usize..100) {
        let row = ui::option_line(&number.to_string(), &label);
        prop_assert_eq!(row.trim_end_matches('\n').width(), LINE_WIDTH);
    }

    /// Footers of every kind match the header width, colored or not
    #[test]
    fn footers_align_with_header(footer in footer_strategy(), colored in any::<bool>()) {
        let palette = if colored { Palette::colored() } else { Palette::plain() };
        let plain_footer = ui::render_footer(footer, &Palette::plain());
        let header = ui::render_header(&Palette::plain());
        for line in plain_footer.lines().chain(header.lines()) {
            prop_assert_eq!(line.width(), LINE_WIDTH);
        }
        // Color codes never change the number of lines.
        prop_assert_eq!(
            ui::render_footer(footer, &palette).lines().count(),
            plain_footer.lines().count()
        );
    }
}
