//! Full pipeline runs against in-memory source and target graphs.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;
use westeros_migrate::normalize::region::{REGION_LINKS, ROOT_CHILDREN};
use westeros_migrate::pipeline::migrate;
use westeros_migrate::{MigrateError, NormalizeError, Schema};
use westeros_migrate_repository::{InMemorySourceGraph, InMemoryTargetGraph, StoreError};
use westeros_migrate_shared::{EdgeKind, EntityKind, RawVertex};

/// Source graph builder that hands out ids and remembers them by name.
struct Fixture {
    graph: InMemorySourceGraph,
    ids: HashMap<String, String>,
    next: usize,
}

impl Fixture {
    fn new() -> Self {
        Self {
            graph: InMemorySourceGraph::new(),
            ids: HashMap::new(),
            next: 0,
        }
    }

    fn vertex(&mut self, label: &str, key: &str, fields: &[(&str, &str)]) -> &mut Self {
        self.next += 1;
        let id = format!("#{}:{}", label.len(), self.next);
        let mut vertex = RawVertex::new(id.as_str());
        for (name, value) in fields {
            vertex = vertex.with_field(*name, *value);
        }
        self.graph.add_vertex(label, vertex);
        self.ids.insert(key.to_string(), id);
        self
    }

    fn named(&mut self, label: &str, name: &str) -> &mut Self {
        self.vertex(label, name, &[("name", name)])
    }

    fn edge(&mut self, relationship_type: &str, from: &str, to: &str) -> &mut Self {
        let from = self.ids[from].clone();
        let to = self.ids[to].clone();
        self.graph.add_edge(relationship_type, from, to);
        self
    }

    fn build(self) -> Arc<InMemorySourceGraph> {
        Arc::new(self.graph)
    }
}

/// A small snapshot of the wiki graph containing every region the hierarchy
/// tables mention.
fn westeros() -> Fixture {
    westeros_without("")
}

fn westeros_without(missing_region: &str) -> Fixture {
    let mut fixture = Fixture::new();

    let mut regions = BTreeSet::new();
    for (_, children) in ROOT_CHILDREN {
        regions.extend(children.iter().copied());
    }
    for (parent, children) in REGION_LINKS {
        regions.insert(*parent);
        regions.extend(children.iter().copied());
    }
    regions.remove(missing_region);
    for name in regions {
        fixture.named("Region", name);
    }

    // Regions without a table parent are attached by the source itself,
    // parent first as the source stores them.
    fixture
        .named("Settlement", "Winterfell")
        .edge("Has_Castles", "The North", "Winterfell")
        .edge("Has_Places", "The North", "The Wall")
        .edge("Has_Cities", "The Crownlands", "King's Landing")
        .edge("Has_Cities", "The Reach", "Oldtown")
        .edge("Has_Cities", "Slaver's Bay", "Meereen")
        .edge("Has_Places", "Free Cities", "House of Black and White")
        // Already covered by the tables; must not produce a second edge.
        .edge("Has_Towns", "Dorne", "Planky Town");

    fixture
        .vertex(
            "Character",
            "Jon Snow",
            &[
                ("name", "Jon Snow"),
                ("Aka", "Jon Snow(given name)<br>Lord Snow"),
            ],
        )
        .vertex(
            "Character",
            "Brynden Tully",
            &[("name", "\"Brynden Tully\" (Blackfish)")],
        )
        // Never makes it through normalization.
        .vertex("Character", "nameless", &[("Aka", "Nobody")])
        .vertex("Noblehouse", "House Stark", &[("name", "House Stark")])
        .vertex(
            "Noble_house",
            "House Tully",
            &[("name", "House Tully"), ("Words", "Family, Duty, Honor (official)")],
        )
        .edge("Has_Seat", "House Stark", "Winterfell")
        .edge("Has_Place", "Jon Snow", "Winterfell")
        .edge("Has_Place", "nameless", "Winterfell")
        .edge("Has_Allegiance", "Jon Snow", "House Stark")
        .edge("Has_Allegiance", "Brynden Tully", "House Tully")
        .edge("Has_Allegiance", "nameless", "House Stark")
        // Wrong endpoint labels for the allegiance query.
        .edge("Has_Allegiance", "Jon Snow", "The Wall");

    fixture
}

fn entity<'a>(
    snapshot: &'a westeros_migrate_repository::TargetSnapshot,
    kind: EntityKind,
    name: &str,
) -> &'a (EntityKind, String, Vec<String>, Option<Vec<String>>) {
    snapshot
        .entities
        .iter()
        .find(|(k, n, _, _)| *k == kind && n == name)
        .unwrap_or_else(|| panic!("no {} named {}", kind, name))
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[tokio::test]
async fn test_entities_are_normalized() {
    let target = Arc::new(InMemoryTargetGraph::new());
    migrate(westeros().build(), target.clone(), Schema::default())
        .await
        .unwrap();

    let snapshot = target.snapshot().await;

    let stark = entity(&snapshot, EntityKind::NobleHouse, "Stark");
    assert_eq!(stark.2, strings(&["House Stark"]));
    assert_eq!(stark.3, Some(Vec::new()));

    let tully = entity(&snapshot, EntityKind::NobleHouse, "Tully");
    assert_eq!(tully.3, Some(strings(&["Family, Duty, Honor"])));

    let jon = entity(&snapshot, EntityKind::Character, "Jon Snow");
    assert_eq!(jon.2, strings(&["Jon Snow", "Lord Snow"]));
    assert_eq!(jon.3, None);

    entity(&snapshot, EntityKind::Character, "Brynden Tully");
    entity(&snapshot, EntityKind::Region, "Winterfell");
    for root in ["World", "Westeros", "Essos"] {
        assert!(entity(&snapshot, EntityKind::Region, root).2.is_empty());
    }

    assert_eq!(
        snapshot
            .entities
            .iter()
            .filter(|(kind, _, _, _)| *kind == EntityKind::Character)
            .count(),
        2
    );
}

#[tokio::test]
async fn test_region_hierarchy_is_a_tree_rooted_at_world() {
    let target = Arc::new(InMemoryTargetGraph::new());
    migrate(westeros().build(), target.clone(), Schema::default())
        .await
        .unwrap();

    let snapshot = target.snapshot().await;
    let mut parents: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (kind, child, parent) in &snapshot.edges {
        if *kind == EdgeKind::HasParentRegion {
            parents
                .entry(child.as_str())
                .or_default()
                .push(parent.as_str());
        }
    }

    for (kind, name, _, _) in &snapshot.entities {
        if *kind != EntityKind::Region {
            continue;
        }
        let count = parents.get(name.as_str()).map(Vec::len).unwrap_or(0);
        if name == "World" {
            assert_eq!(count, 0, "World has a parent");
        } else {
            assert_eq!(count, 1, "{} has {} parents", name, count);
        }
    }

    assert_eq!(parents["Winterfell"], vec!["The North"]);
    assert_eq!(parents["Planky Town"], vec!["Dorne"]);
    assert_eq!(parents["The North"], vec!["Westeros"]);
    assert_eq!(parents["Westeros"], vec!["World"]);

    // Every region reaches World.
    for start in parents.keys() {
        let mut current = *start;
        let mut steps = 0;
        while current != "World" {
            current = parents[current][0];
            steps += 1;
            assert!(steps < 16, "cycle through {}", start);
        }
    }
}

#[tokio::test]
async fn test_edges_only_between_created_entities() {
    let target = Arc::new(InMemoryTargetGraph::new());
    let report = migrate(westeros().build(), target.clone(), Schema::default())
        .await
        .unwrap();

    assert_eq!(report.edges(EdgeKind::LivesIn).created, 1);
    assert_eq!(report.edges(EdgeKind::LivesIn).skipped, 1);
    assert_eq!(report.edges(EdgeKind::OwesAllegianceTo).created, 2);
    assert_eq!(report.edges(EdgeKind::OwesAllegianceTo).skipped, 1);
    assert_eq!(report.edges(EdgeKind::HasSeat).created, 1);
    assert_eq!(report.edges(EdgeKind::HasParentRegion).skipped, 0);

    let entities: BTreeSet<_> = target
        .entities()
        .await
        .into_iter()
        .map(|(id, _)| id)
        .collect();
    let edges = target.edges().await;
    assert_eq!(edges.len(), report.total_edges_created());
    assert!(edges
        .iter()
        .all(|(_, from, to)| entities.contains(from) && entities.contains(to)));

    let snapshot = target.snapshot().await;
    assert!(snapshot.edges.contains(&(
        EdgeKind::OwesAllegianceTo,
        "Jon Snow".to_string(),
        "Stark".to_string()
    )));
    assert!(snapshot.edges.contains(&(
        EdgeKind::HasSeat,
        "Stark".to_string(),
        "Winterfell".to_string()
    )));
}

#[tokio::test]
async fn test_rerun_rebuilds_the_same_graph() {
    let source = westeros().build();
    let target = Arc::new(InMemoryTargetGraph::new());

    let first_report = migrate(source.clone(), target.clone(), Schema::default())
        .await
        .unwrap();
    let first = target.snapshot().await;
    let first_ids: BTreeSet<_> = target.entities().await.into_iter().map(|(id, _)| id).collect();
    let first_uuids: BTreeSet<_> = target
        .entities()
        .await
        .into_iter()
        .map(|(_, e)| e.uuid)
        .collect();

    let second_report = migrate(source, target.clone(), Schema::default())
        .await
        .unwrap();
    let second = target.snapshot().await;
    let second_ids: BTreeSet<_> = target.entities().await.into_iter().map(|(id, _)| id).collect();
    let second_uuids: BTreeSet<_> = target
        .entities()
        .await
        .into_iter()
        .map(|(_, e)| e.uuid)
        .collect();

    assert_eq!(first, second);
    assert_eq!(first_report.entities, second_report.entities);
    assert_eq!(first_report.edges, second_report.edges);
    assert!(first_ids.is_disjoint(&second_ids));
    assert!(first_uuids.is_disjoint(&second_uuids));
    assert_eq!(target.recreations().await, 2);
}

#[tokio::test]
async fn test_schema_failure_aborts_before_entities() {
    let target = Arc::new(InMemoryTargetGraph::new().failing_statement("noble_house_name"));

    let err = migrate(westeros().build(), target.clone(), Schema::default())
        .await
        .unwrap_err();

    match err {
        MigrateError::SchemaApplication {
            statement, source, ..
        } => {
            assert!(statement.contains("noble_house_name"));
            assert!(matches!(source, StoreError::QueryError(_)));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(target.entities().await.is_empty());
    assert!(target.edges().await.is_empty());
}

#[tokio::test]
async fn test_missing_reference_region_is_fatal() {
    // The source snapshot no longer has a settlement the link table names.
    let broken = westeros_without("Estermont");

    let target = Arc::new(InMemoryTargetGraph::new());
    let err = migrate(broken.build(), target.clone(), Schema::default())
        .await
        .unwrap_err();

    assert!(matches!(
        &err,
        MigrateError::Normalize(NormalizeError::LookupFailure { name }) if name == "Estermont"
    ));
    assert_eq!(err.to_string(), "Lookup failure: no region named 'Estermont' found");
    assert_eq!(target.recreations().await, 0);
}

#[tokio::test]
async fn test_entity_creation_failure_is_fatal() {
    let target = Arc::new(InMemoryTargetGraph::new().failing_entity("Tully"));

    let err = migrate(westeros().build(), target.clone(), Schema::default())
        .await
        .unwrap_err();

    assert!(matches!(err, MigrateError::Store(_)));
    assert!(target.edges().await.is_empty());
    assert_eq!(target.statements().await.len(), Schema::default().len());
}
