//! Load-case assembly: factored dead load plus the moving two-axle truck

use crate::conditions::DesignConditions;
use crate::math::Vec as ColVec;
use crate::model::{BridgeModel, MemberGeometry};

/// LRFD dead load factor
pub const DEAD_LOAD_FACTOR: f64 = 1.35;
/// LRFD live load factor including the dynamic allowance
pub const LIVE_LOAD_FACTOR: f64 = 1.75 * 1.33;
/// Standard gravity in m/s²
const GRAVITY: f64 = 9.8066;

/// Build one load vector per load case, length `2 * n_joints`, kN.
///
/// Case 0 carries dead load only (truck off the bridge); case `ilc >= 1`
/// adds the rear axle at loaded joint `ilc - 1` and the front axle at
/// loaded joint `ilc`. Downward forces are negative y.
pub(crate) fn build_load_vectors(
    model: &BridgeModel,
    conditions: &DesignConditions,
    geometry: &[MemberGeometry],
) -> Vec<ColVec> {
    let n_dofs = 2 * model.joints.len();
    let n_cases = conditions.load_case_count();
    let n_loaded = conditions.loaded_joint_count;

    let mut loads = vec![ColVec::zeros(n_dofs); n_cases];

    // Member self-weight: half at each end joint, every case.
    // area·length·density·g is N, so /2000 gives kN per end.
    for (member, geom) in model.members.iter().zip(geometry) {
        let material = &model.materials[member.material];
        let shape = &model.shapes[member.shape];
        let end_weight =
            DEAD_LOAD_FACTOR * shape.area * geom.length * material.density * GRAVITY / 2000.0;
        for load in loads.iter_mut() {
            load[2 * member.a + 1] -= end_weight;
            load[2 * member.b + 1] -= end_weight;
        }
    }

    // Deck dead load at each loaded joint, halved at the two ends where
    // only half a deck panel bears on the joint.
    let deck_load = DEAD_LOAD_FACTOR * conditions.deck_type.point_dead_load();
    for joint in 0..n_loaded {
        let share = if joint == 0 || joint == n_loaded - 1 {
            deck_load / 2.0
        } else {
            deck_load
        };
        for load in loads.iter_mut() {
            load[2 * joint + 1] -= share;
        }
    }

    // Live load: the truck straddles loaded joints (ilc - 1, ilc).
    let (front_axle, rear_axle) = conditions.load_type.axle_loads();
    for (ilc, load) in loads.iter_mut().enumerate().skip(1) {
        load[2 * (ilc - 1) + 1] -= LIVE_LOAD_FACTOR * rear_axle;
        load[2 * ilc + 1] -= LIVE_LOAD_FACTOR * front_axle;
    }

    loads
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::{DeckType, LoadType};
    use crate::elements::{Joint, Material, Member, Shape};
    use approx::assert_relative_eq;

    fn deck_model(n_joints: usize) -> BridgeModel {
        let mut model = BridgeModel::new();
        model.add_material(Material::carbon_steel());
        model.add_shape(Shape::bar(0.05));
        for i in 0..n_joints {
            model.add_joint(Joint::new(4.0 * i as f64, 0.0));
        }
        for i in 0..n_joints - 1 {
            model.add_member(Member::new(i, i + 1, 0, 0)).unwrap();
        }
        model
    }

    #[test]
    fn test_case_zero_has_no_live_load() {
        let model = deck_model(4);
        let conditions = DesignConditions::simple_span(4);
        let geometry = model.member_geometry().unwrap();
        let loads = build_load_vectors(&model, &conditions, &geometry);

        assert_eq!(loads.len(), 4);
        // Same dead load at interior joints 1 and 2 in case 0
        assert_relative_eq!(loads[0][3], loads[0][5]);
        // Case 1 puts the rear axle on joint 0 and the front axle on joint 1
        let (front, rear) = LoadType::StandardTruck.axle_loads();
        assert_relative_eq!(loads[1][1] - loads[0][1], -LIVE_LOAD_FACTOR * rear);
        assert_relative_eq!(loads[1][3] - loads[0][3], -LIVE_LOAD_FACTOR * front);
        assert_relative_eq!(loads[1][5], loads[0][5]);
    }

    #[test]
    fn test_deck_load_halved_at_span_ends() {
        let model = deck_model(4);
        let conditions = DesignConditions::simple_span(4);
        let geometry = model.member_geometry().unwrap();
        let loads = build_load_vectors(&model, &conditions, &geometry);

        let deck = DEAD_LOAD_FACTOR * DeckType::MediumStrength.point_dead_load();
        // Joint 0 carries one member end; joint 1 carries two
        let member_end = loads[0][1] + deck / 2.0;
        let interior = loads[0][3] + deck;
        assert_relative_eq!(2.0 * member_end, interior);
    }

    #[test]
    fn test_no_x_components() {
        let model = deck_model(3);
        let conditions = DesignConditions::simple_span(3);
        let geometry = model.member_geometry().unwrap();
        for load in build_load_vectors(&model, &conditions, &geometry) {
            for joint in 0..3 {
                assert_eq!(load[2 * joint], 0.0);
            }
        }
    }

    #[test]
    fn test_lightweight_deck_is_lighter() {
        assert!(
            DeckType::LightweightConcrete.point_dead_load()
                < DeckType::MediumStrength.point_dead_load()
        );
    }
}
