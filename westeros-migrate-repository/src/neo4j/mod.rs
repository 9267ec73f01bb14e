// Neo4j module - connection setup, source reading and target writing
mod connection;
mod cypher;
mod source;
mod target;

pub use connection::{connect, probe};
pub use source::Neo4jSourceGraph;
pub use target::Neo4jTargetGraph;
