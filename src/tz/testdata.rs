use crate::tz::{Dst, Location, Transition, Zone, ZoneTable};

/// Transitions of `America/Los_Angeles` as `(unix second, zone index)`.
///
/// This is a trimmed copy of the real table: the switch from local mean time
/// in 1883, then every change from 1966 through 2011. The gap in between has
/// no effect on lookups at the instants the tests use.
const LOS_ANGELES_TRANSITIONS: &[(i64, usize)] = &[
    (-2717640000, 2),
    (-116434800, 1), (-100105200, 2),
    (-84376800, 1), (-68655600, 2),
    (-52927200, 1), (-37206000, 2),
    (-21477600, 1), (-5756400, 2),
    (9972000, 1), (25693200, 2),
    (41421600, 1), (57747600, 2),
    (73476000, 1), (89197200, 2),
    (104925600, 1), (120646800, 2),
    (126698400, 1), (152096400, 2),
    (162381600, 1), (183546000, 2),
    (199274400, 1), (215600400, 2),
    (230724000, 1), (247050000, 2),
    (262778400, 1), (278499600, 2),
    (294228000, 1), (309949200, 2),
    (325677600, 1), (341398800, 2),
    (357127200, 1), (372848400, 2),
    (388576800, 1), (404902800, 2),
    (420026400, 1), (436352400, 2),
    (452080800, 1), (467802000, 2),
    (483530400, 1), (499251600, 2),
    (514980000, 1), (530701200, 2),
    (544615200, 1), (562150800, 2),
    (576064800, 1), (594205200, 2),
    (607514400, 1), (625654800, 2),
    (638964000, 1), (657104400, 2),
    (671018400, 1), (688554000, 2),
    (702468000, 1), (720003600, 2),
    (733917600, 1), (752058000, 2),
    (765367200, 1), (783507600, 2),
    (796816800, 1), (814957200, 2),
    (828871200, 1), (846406800, 2),
    (860320800, 1), (877856400, 2),
    (891770400, 1), (909306000, 2),
    (923220000, 1), (941360400, 2),
    (954669600, 1), (972810000, 2),
    (986119200, 1), (1004259600, 2),
    (1018173600, 1), (1035709200, 2),
    (1049623200, 1), (1067158800, 2),
    (1081072800, 1), (1099213200, 2),
    (1112522400, 1), (1130662800, 2),
    (1143972000, 1), (1162112400, 2),
    (1173607200, 1), (1194166800, 2),
    (1205056800, 1), (1225616400, 2),
    (1236506400, 1), (1257066000, 2),
    (1268560800, 1), (1289120400, 2),
    (1300010400, 1), (1320570000, 2),
];

/// Returns a location with the zones of `America/Los_Angeles`: local mean
/// time (zone 0, never transitioned to), PDT (zone 1) and PST (zone 2).
pub(crate) fn los_angeles() -> Location {
    let zone = |name: &str, offset: i32, dst: bool| Zone {
        name: name.to_string(),
        offset,
        dst: Dst::from(dst),
    };
    let table = ZoneTable {
        zones: vec![
            zone("LMT", -28378, false),
            zone("PDT", -7 * 3600, true),
            zone("PST", -8 * 3600, false),
        ],
        transitions: LOS_ANGELES_TRANSITIONS
            .iter()
            .map(|&(when, zone)| Transition { when, zone })
            .collect(),
        extend: Some("PST8PDT,M3.2.0,M11.1.0".to_string()),
    };
    // OK because the table above is sorted and its zone indices are valid.
    Location::new("America/Los_Angeles", table).unwrap()
}
