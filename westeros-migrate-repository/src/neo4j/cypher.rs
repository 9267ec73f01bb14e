// Cypher rendering for structured queries and target writes
use westeros_migrate_shared::{EdgeKind, NewEntity};

use crate::types::{EdgeQuery, VertexQuery};

/// Backtick-quote a label, relationship type or property name.
pub(crate) fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Column alias for the `idx`-th projected field.
///
/// Source field names are not valid Cypher aliases in general, so columns are
/// numbered and mapped back by position.
pub(crate) fn field_alias(idx: usize) -> String {
    format!("f{}", idx)
}

fn label_predicate(var: &str, labels: &[&str]) -> Option<String> {
    if labels.is_empty() {
        return None;
    }

    let alternatives: Vec<String> = labels
        .iter()
        .map(|label| format!("{}:{}", var, quote_identifier(label)))
        .collect();

    Some(format!("({})", alternatives.join(" OR ")))
}

pub(crate) fn vertex_query(query: &VertexQuery) -> String {
    let mut cypher = String::from("MATCH (n)");

    if let Some(predicate) = label_predicate("n", query.labels) {
        cypher.push_str(" WHERE ");
        cypher.push_str(&predicate);
    }

    cypher.push_str(" RETURN elementId(n) AS id");
    for (idx, field) in query.fields.iter().enumerate() {
        cypher.push_str(&format!(
            ", n.{} AS {}",
            quote_identifier(field),
            field_alias(idx)
        ));
    }

    cypher
}

/// Relationship types are bound as the `$types` parameter.
pub(crate) fn edge_query(query: &EdgeQuery) -> String {
    let mut predicates = vec![String::from("type(r) IN $types")];
    predicates.extend(label_predicate("a", query.out_labels));
    predicates.extend(label_predicate("b", query.in_labels));

    format!(
        "MATCH (a)-[r]->(b) WHERE {} RETURN elementId(a) AS out_id, elementId(b) AS in_id",
        predicates.join(" AND ")
    )
}

pub(crate) fn create_entity(entity: &NewEntity) -> String {
    let mut assignments = vec!["n.uuid = $uuid", "n.name = $name", "n.alias = $alias"];
    if entity.motto.is_some() {
        assignments.push("n.motto = $motto");
    }

    format!(
        "CREATE (n:{}) SET {} RETURN elementId(n) AS id",
        quote_identifier(entity.kind.label()),
        assignments.join(", ")
    )
}

pub(crate) fn create_edge(kind: EdgeKind) -> String {
    format!(
        "MATCH (a) WHERE elementId(a) = $from \
         MATCH (b) WHERE elementId(b) = $to \
         CREATE (a)-[:{}]->(b) \
         RETURN count(*) AS created",
        quote_identifier(kind.relationship_type())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use westeros_migrate_shared::{EntityKind, NewEntity};

    #[test]
    fn test_vertex_query_with_alternative_labels() {
        let query = VertexQuery::new(&["Region", "Settlement"], &["name"]);
        assert_eq!(
            vertex_query(&query),
            "MATCH (n) WHERE (n:`Region` OR n:`Settlement`) RETURN elementId(n) AS id, n.`name` AS f0"
        );
    }

    #[test]
    fn test_edge_query_quotes_odd_labels() {
        let query = EdgeQuery::new(&["Has_Place"])
            .from_labels(&["Character"])
            .to_labels(&["Region", "Settlement"]);
        assert_eq!(
            edge_query(&query),
            "MATCH (a)-[r]->(b) WHERE type(r) IN $types AND (a:`Character`) \
             AND (b:`Region` OR b:`Settlement`) RETURN elementId(a) AS out_id, elementId(b) AS in_id"
        );
    }

    #[test]
    fn test_unconstrained_edge_query() {
        let query = EdgeQuery::new(&["Has_Seat"]);
        assert!(edge_query(&query).starts_with("MATCH (a)-[r]->(b) WHERE type(r) IN $types RETURN"));
    }

    #[test]
    fn test_backticks_are_escaped() {
        assert_eq!(quote_identifier("Has_Regional+capital"), "`Has_Regional+capital`");
        assert_eq!(quote_identifier("we`ird"), "`we``ird`");
    }

    #[test]
    fn test_motto_only_set_for_houses() {
        let mut entity = NewEntity {
            kind: EntityKind::NobleHouse,
            uuid: "u".to_string(),
            name: "Stark".to_string(),
            alias: vec![],
            motto: Some(vec![]),
        };
        assert!(create_entity(&entity).contains("n.motto = $motto"));
        assert!(create_entity(&entity).starts_with("CREATE (n:`NobleHouse`)"));

        entity.kind = EntityKind::Character;
        entity.motto = None;
        assert!(!create_entity(&entity).contains("motto"));
    }

    #[test]
    fn test_create_edge_uses_target_relationship_type() {
        assert!(create_edge(EdgeKind::HasParentRegion).contains("CREATE (a)-[:`Has_Parent_Region`]->(b)"));
    }
}
