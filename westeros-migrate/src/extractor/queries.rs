// Source-side labels, relationship types and projections
use westeros_migrate_repository::{EdgeQuery, VertexQuery};
use westeros_migrate_shared::EdgeKind;

pub const CHARACTER_LABELS: &[&str] = &["Character"];
// Both spellings occur in the source data.
pub const HOUSE_LABELS: &[&str] = &["Noble_house", "Noblehouse"];
pub const REGION_LABELS: &[&str] = &["Region", "Settlement"];
pub const ALLEGIANCE_LABELS: &[&str] = &["Character", "Noblehouse", "Noble_house"];

pub const CHARACTERS: VertexQuery = VertexQuery::new(CHARACTER_LABELS, &["name", "Aka"]);
pub const HOUSES: VertexQuery = VertexQuery::new(HOUSE_LABELS, &["name", "Words", "Motto"]);
pub const REGIONS: VertexQuery = VertexQuery::new(REGION_LABELS, &["name"]);

pub const HAS_SEAT: EdgeQuery = EdgeQuery::new(&["Has_Seat"]);

pub const HAS_PARENT_REGION: EdgeQuery = EdgeQuery::new(&[
    "Has_Castles",
    "Has_Cities",
    "Has_Towns",
    "Has_Villages",
    "Has_Regional+capital",
    "Has_Places",
])
.from_labels(REGION_LABELS)
.to_labels(REGION_LABELS);

pub const LIVES_IN: EdgeQuery = EdgeQuery::new(&["Has_Place"])
    .from_labels(CHARACTER_LABELS)
    .to_labels(REGION_LABELS);

pub const OWES_ALLEGIANCE_TO: EdgeQuery = EdgeQuery::new(&["Has_Allegiance"])
    .from_labels(ALLEGIANCE_LABELS)
    .to_labels(ALLEGIANCE_LABELS);

/// The source query backing each target relationship kind.
pub fn edge_query(kind: EdgeKind) -> &'static EdgeQuery {
    match kind {
        EdgeKind::HasSeat => &HAS_SEAT,
        EdgeKind::HasParentRegion => &HAS_PARENT_REGION,
        EdgeKind::LivesIn => &LIVES_IN,
        EdgeKind::OwesAllegianceTo => &OWES_ALLEGIANCE_TO,
    }
}
