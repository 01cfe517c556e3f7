use choco_page::donation::{DonationError, DonationForm};
use choco_page::filter::{ALL_CATEGORIES, CardTransition, card_matches};
use choco_page::newsletter::{self, SubscribeError};
use choco_page::scrollspy::{SectionSpan, active_section, scroll_target};
use choco_page::slider::Rotation;
use choco_page::text_scale::TextScale;
use choco_page::theme::Theme;

#[test]
fn donating_with_the_default_preset_thanks_the_donor_by_amount() {
    let form = DonationForm {
        name: "Ana".into(),
        email: "ana@example.com".into(),
        preset_amount: Some("100".into()),
        custom_amount: String::new(),
    };
    let receipt = form.submit().expect("a filled form should validate");
    assert_eq!(receipt.donor, "Ana");
    assert_eq!(receipt.amount, "100");
}

#[test]
fn donation_checks_presence_before_email_shape() {
    // A blank name hides the email problem behind the completeness error.
    let form = DonationForm {
        name: String::new(),
        email: "not-an-email".into(),
        preset_amount: Some("50".into()),
        custom_amount: String::new(),
    };
    assert_eq!(form.submit(), Err(DonationError::Incomplete));

    let form = DonationForm {
        name: "Ana".into(),
        email: "not-an-email".into(),
        preset_amount: Some("50".into()),
        custom_amount: String::new(),
    };
    assert_eq!(form.submit(), Err(DonationError::InvalidEmail));
}

#[test]
fn custom_amount_wins_over_the_active_preset() {
    let form = DonationForm {
        name: "Ana".into(),
        email: "ana@example.com".into(),
        preset_amount: Some("100".into()),
        custom_amount: "37.5".into(),
    };
    let receipt = form.submit().expect("a filled form should validate");
    assert_eq!(receipt.amount, "37.5");
}

#[test]
fn newsletter_rejects_a_domain_without_a_dot() {
    assert_eq!(
        newsletter::subscribe("foo@bar"),
        Err(SubscribeError::InvalidEmail)
    );
    let accepted = newsletter::subscribe("  foo@bar.org ").expect("valid address");
    assert_eq!(accepted.email, "foo@bar.org");
}

#[test]
fn resetting_the_portfolio_filter_reveals_every_card() {
    let cards = [
        Some("birds"),
        Some("mammals"),
        Some("flora"),
        Some("birds"),
        None,
    ];
    assert!(
        cards
            .iter()
            .all(|category| card_matches(ALL_CATEGORIES, *category))
    );

    let visible: Vec<_> = cards
        .iter()
        .filter(|category| card_matches("birds", **category))
        .collect();
    assert_eq!(visible.len(), 2);
}

#[test]
fn filtered_cards_leave_layout_only_after_their_fade() {
    let conceal = CardTransition::from_match(false);
    assert!(
        !conceal
            .immediate_styles()
            .iter()
            .any(|(property, _)| *property == "display")
    );
    assert!(
        conceal
            .settled_styles()
            .contains(&("display", "none"))
    );
    // Conceal waits for the fade; reveal only waits one frame.
    assert!(conceal.delay_ms() > CardTransition::from_match(true).delay_ms());
}

#[test]
fn slider_returns_home_after_a_full_lap() {
    for len in 1..=6 {
        let mut rotation = Rotation::new(len).expect("non-empty slider");
        for _ in 0..len {
            assert!(rotation.advance() < len);
        }
        assert_eq!(rotation.index(), 0, "lap of {len} should land on the start");
    }
}

#[test]
fn scrollspy_follows_the_reading_position_down_the_page() {
    let spans = vec![
        SectionSpan {
            id: "inicio".into(),
            top: 0.0,
            height: 600.0,
        },
        SectionSpan {
            id: "proyectos".into(),
            top: 600.0,
            height: 800.0,
        },
        SectionSpan {
            id: "donar".into(),
            top: 1400.0,
            height: 700.0,
        },
    ];

    assert_eq!(active_section(&spans, 0.0), Some("inicio"));
    // The probe sits 100px below the scroll position, so a section takes
    // over shortly before its top reaches the viewport edge.
    assert_eq!(active_section(&spans, 550.0), Some("proyectos"));
    assert_eq!(active_section(&spans, 1500.0), Some("donar"));
    assert_eq!(active_section(&spans, 9000.0), None);
}

#[test]
fn scroll_target_leaves_room_for_the_fixed_header() {
    assert_eq!(scroll_target(600.0), 520.0);
    // Sections near the top may target a negative position; the browser
    // clamps that to zero on its own.
    assert_eq!(scroll_target(0.0), -80.0);
}

#[test]
fn text_stepper_walks_the_band_and_reset_recenters() {
    let mut scale = TextScale::default();
    while let Some(next) = scale.increased() {
        scale = next;
    }
    assert_eq!(scale.px(), TextScale::MAX_PX);

    while let Some(next) = scale.decreased() {
        scale = next;
    }
    assert_eq!(scale.px(), TextScale::MIN_PX);

    assert_eq!(TextScale::reset().px(), TextScale::DEFAULT_PX);
}

#[test]
fn first_visit_theme_comes_from_the_os() {
    assert_eq!(Theme::initial(None, true), Theme::Dark);
    assert_eq!(Theme::initial(None, false), Theme::Light);
    // A returning visitor's saved choice beats the OS hint.
    assert_eq!(Theme::initial(Some(Theme::Light), true), Theme::Light);
}
