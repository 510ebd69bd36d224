//! Property tests for the gesture invariants.

use std::f32::consts::{FRAC_PI_2, TAU};

use floorplan_core::{
    FloorPlan, PlacedElement, ResizeAxis, ResizeGesture, MIN_ELEMENT_SIZE,
};
use proptest::prelude::*;

fn plan_with_item(width: f32, height: f32) -> (FloorPlan, floorplan_core::ElementId) {
    let mut plan = FloorPlan::default();
    let id = plan.add_element(PlacedElement::new("Item", "item.png", width, height));
    (plan, id)
}

proptest! {
    /// No sequence of resize updates can push a dimension below 20 px.
    #[test]
    fn resize_never_falls_below_floor(
        start in 20.0f32..400.0,
        translations in prop::collection::vec(-600.0f32..600.0, 1..40),
    ) {
        let (mut plan, id) = plan_with_item(start, start);
        let resize = ResizeGesture::begin(&plan, id, ResizeAxis::Horizontal)
            .expect("begin");

        for t in translations {
            resize.update(&mut plan, t).expect("update");
            let width = plan.get_element(id).expect("exists").width;
            prop_assert!(width >= MIN_ELEMENT_SIZE);
            // Within the same gesture the width is a pure function of
            // the origin snapshot and the latest cumulative translation.
            prop_assert_eq!(width, (start + t).max(MIN_ELEMENT_SIZE));
        }
    }

    /// After n rotate taps the rotation is n * pi/2 modulo 2*pi.
    #[test]
    fn rotation_is_quarter_turn_quantized(taps in 0u32..64) {
        let (mut plan, id) = plan_with_item(60.0, 60.0);
        for _ in 0..taps {
            plan.rotate_quarter_turn(id).expect("rotate");
        }
        let rotation = plan.get_element(id).expect("exists").rotation;
        #[allow(clippy::cast_precision_loss)]
        let expected = (taps as f32 * FRAC_PI_2).rem_euclid(TAU);
        // Accumulated f32 error stays far below a degree.
        let diff = (rotation - expected).abs();
        prop_assert!(diff < 1e-4 || (TAU - diff) < 1e-4);
    }

    /// Deleting one id removes exactly that element and keeps the rest
    /// in their original relative order.
    #[test]
    fn deletion_removes_exactly_one(count in 2usize..12, victim_index in 0usize..12) {
        prop_assume!(victim_index < count);

        let mut plan = FloorPlan::default();
        let ids: Vec<_> = (0..count)
            .map(|i| {
                plan.add_element(PlacedElement::new(
                    format!("Item {i}"),
                    "item.png",
                    40.0,
                    40.0,
                ))
            })
            .collect();

        let victim = ids[victim_index];
        plan.remove_element(victim).expect("remove");

        let survivors: Vec<_> = plan.elements().map(|e| e.id).collect();
        let expected: Vec<_> = ids
            .iter()
            .copied()
            .filter(|id| *id != victim)
            .collect();
        prop_assert_eq!(survivors, expected);
    }
}
