use super::*;

#[test]
fn wrap_offset_stays_in_range_for_any_sign() {
    let travel = column_travel(CARD_HEIGHT);
    for offset in [-5000.0, -2736.0, -1.0, 0.0, 1.0, 684.0, 2735.9, 2736.0, 9000.0] {
        let wrapped = wrap_offset(offset, travel);
        assert!(
            (0.0..travel).contains(&wrapped),
            "offset {offset} wrapped to {wrapped}"
        );
    }
}

#[test]
fn wrap_offset_is_identity_inside_the_range() {
    assert_eq!(wrap_offset(684.0, 2736.0), 684.0);
    assert_eq!(wrap_offset(0.0, 2736.0), 0.0);
}

#[test]
fn translation_sign_follows_direction() {
    let wrapped = wrap_offset(684.0, column_travel(CARD_HEIGHT));
    assert_eq!(
        column_translation(Direction::Down, 684.0, CARD_HEIGHT),
        -wrapped
    );
    assert_eq!(
        column_translation(Direction::Up, 684.0, CARD_HEIGHT),
        wrapped
    );
}

#[test]
fn translation_is_bounded_by_column_travel() {
    let travel = column_travel(CARD_HEIGHT);
    for offset in [-9999.0, -684.0, 0.0, 684.0, 3000.0, 123456.0] {
        for direction in [Direction::Down, Direction::Up] {
            let t = column_translation(direction, offset, CARD_HEIGHT);
            assert!((-travel..=travel).contains(&t));
        }
    }
}

#[test]
fn progress_is_zero_when_nothing_scrolls() {
    assert_eq!(scroll_progress(0.0, 600.0, 600.0), 0.0);
    assert_eq!(scroll_progress(100.0, 600.0, 600.0), 0.0);
    assert_eq!(scroll_progress(0.0, 400.0, 600.0), 0.0);
}

#[test]
fn progress_spans_the_scroll_range() {
    // viewport 600, content 600 + one full pass
    let content = 600.0 + single_travel(CARD_HEIGHT);
    assert_eq!(scroll_progress(0.0, content, 600.0), 0.0);
    assert_eq!(scroll_progress(single_travel(CARD_HEIGHT), content, 600.0), 1.0);
    assert_eq!(
        offset_for_progress(scroll_progress(single_travel(CARD_HEIGHT), content, 600.0), CARD_HEIGHT),
        single_travel(CARD_HEIGHT)
    );
}

#[test]
fn progress_is_clamped_against_overscroll() {
    assert_eq!(scroll_progress(2000.0, 1968.0, 600.0), 1.0);
    assert_eq!(scroll_progress(-5.0, 1968.0, 600.0), 0.0);
}

// The worked scenario: 6 murals at 228 px a card.
#[test]
fn halfway_scroll_lands_at_684() {
    assert_eq!(single_travel(228.0), 1368.0);
    assert_eq!(column_travel(228.0), 2736.0);
    let offset = offset_for_progress(0.5, 228.0);
    assert_eq!(offset, 684.0);
    assert_eq!(column_translation(Direction::Down, offset, 228.0), -684.0);
    assert_eq!(column_translation(Direction::Up, offset, 228.0), 684.0);
}
