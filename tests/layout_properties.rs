use accordion::{
    compute_layout, BackgroundPosition, ContentHandle, MenuConfig, Panel, PanelContent, PanelSet,
    Viewport,
};
use proptest::prelude::*;

fn menu(offsets: &[i32]) -> PanelSet {
    let panels = offsets
        .iter()
        .enumerate()
        .map(|(i, offset)| {
            Panel::new(
                format!("p{}", i),
                format!("Panel {}", i),
                *offset,
                ContentHandle::new(PanelContent::default()),
                None,
            )
        })
        .collect();
    PanelSet::new(panels, MenuConfig::default()).expect("non-empty menu")
}

fn offsets_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(0i32..1000, 1..12)
}

proptest! {
    #[test]
    fn exactly_one_panel_is_active(
        offsets in offsets_strategy(),
        pick in any::<prop::sample::Index>(),
        width in 0.0f32..4000.0,
    ) {
        let mut set = menu(&offsets);
        let active = pick.index(offsets.len());
        set.activate(active);
        let geometry = set.arrange(Viewport::new(width, 16.0));

        prop_assert_eq!(geometry.iter().filter(|g| g.active).count(), 1);
        prop_assert!(geometry[active].active);
    }

    #[test]
    fn widths_follow_active_fraction_and_collapsed_width(
        offsets in offsets_strategy(),
        pick in any::<prop::sample::Index>(),
        width in 1.0f32..4000.0,
        font in 8.0f32..32.0,
    ) {
        let config = MenuConfig::default();
        let active = pick.index(offsets.len());
        let (geometry, _) = compute_layout(&offsets, active, Viewport::new(width, font), &config);

        for (index, slot) in geometry.iter().enumerate() {
            if index == active {
                prop_assert!((slot.width - width * config.active_fraction).abs() < 1e-3);
                prop_assert_eq!(slot.background, BackgroundPosition::Center);
            } else {
                prop_assert!((slot.width - 4.0 * font).abs() < 1e-3);
                prop_assert_eq!(slot.background, BackgroundPosition::Offset(-(offsets[index] as f32)));
            }
            prop_assert_eq!(slot.content_width, geometry[active].width);
        }
    }

    #[test]
    fn right_offsets_accumulate_from_the_last_panel(
        offsets in offsets_strategy(),
        pick in any::<prop::sample::Index>(),
        width in 0.0f32..4000.0,
    ) {
        let active = pick.index(offsets.len());
        let (geometry, summary) =
            compute_layout(&offsets, active, Viewport::new(width, 16.0), &MenuConfig::default());

        let mut expected = 0.0f32;
        for slot in geometry.iter().rev() {
            prop_assert!((slot.right_offset - expected).abs() < 1e-2);
            expected += slot.width;
        }
        prop_assert!((summary.total_width - expected).abs() < 1e-2);
    }

    #[test]
    fn arranging_is_idempotent(
        offsets in offsets_strategy(),
        pick in any::<prop::sample::Index>(),
        width in 0.0f32..4000.0,
    ) {
        let mut set = menu(&offsets);
        set.activate(pick.index(offsets.len()));
        let viewport = Viewport::new(width, 16.0);

        let first = set.arrange(viewport).to_vec();
        let second = set.arrange(viewport).to_vec();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn reactivating_the_active_panel_changes_nothing(
        offsets in offsets_strategy(),
        pick in any::<prop::sample::Index>(),
        width in 0.0f32..4000.0,
    ) {
        let mut set = menu(&offsets);
        let active = pick.index(offsets.len());
        set.activate(active);
        let before = set.arrange(Viewport::new(width, 16.0)).to_vec();

        prop_assert!(!set.activate(active));
        prop_assert_eq!(set.active_index(), active);
        prop_assert_eq!(set.geometry(), before.as_slice());
    }

    #[test]
    fn out_of_range_activation_is_ignored(
        offsets in offsets_strategy(),
        extra in 0usize..5,
    ) {
        let mut set = menu(&offsets);
        let before = set.arrange(Viewport::new(1000.0, 16.0)).to_vec();

        prop_assert!(!set.activate(offsets.len() + extra));
        prop_assert_eq!(set.active_index(), 0);
        prop_assert_eq!(set.geometry(), before.as_slice());
    }
}
