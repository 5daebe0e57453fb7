use super::{EdgeFunction, EdgeId, NetworkError, NodeId};
use flate2::read::GzDecoder;
use std::{collections::HashSet, fs::File, io::Read, path::Path};

/// the parts of a compiled SUMO network (`.net.xml`) needed for routing trips
/// and for validating stop matches against it.
///
/// Reference: <https://sumo.dlr.de/docs/Networks/SUMO_Road_Networks.html>
#[derive(Debug, Default, Clone)]
pub struct SumoNetwork {
    /// every `<edge>` element, in document order
    pub edges: Vec<SumoEdge>,
    /// every `<junction>` element with an id, in document order
    pub junctions: Vec<SumoJunction>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SumoEdge {
    pub id: EdgeId,
    /// absent on internal edges
    pub from: Option<NodeId>,
    /// absent on internal edges
    pub to: Option<NodeId>,
    pub function: EdgeFunction,
    /// the edge type id, e.g. `railway.rail`
    pub edge_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SumoJunction {
    pub id: NodeId,
    /// junction type, e.g. `priority`, `rail_signal` or `internal`
    pub junction_type: Option<String>,
}

impl SumoNetwork {
    /// reads a `.net.xml` or `.net.xml.gz` file.
    pub fn from_file(filepath: &Path) -> Result<SumoNetwork, NetworkError> {
        let filename = filepath.to_string_lossy().to_string();
        log::info!("reading SUMO network {filename}");
        let file = File::open(filepath).map_err(|e| NetworkError::ReadError(filename.clone(), e))?;
        let mut raw_string = String::new();
        let gzipped = filepath
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("gz"))
            .unwrap_or_default();
        let read_result = if gzipped {
            GzDecoder::new(file).read_to_string(&mut raw_string)
        } else {
            let mut file = file;
            file.read_to_string(&mut raw_string)
        };
        read_result.map_err(|e| NetworkError::ReadError(filename, e))?;
        SumoNetwork::parse(&raw_string)
    }

    /// parses the text of a compiled SUMO network. only `<edge>` and
    /// `<junction>` children of the root element are retained.
    pub fn parse(raw_string: &str) -> Result<SumoNetwork, NetworkError> {
        let tree = roxmltree::Document::parse(raw_string)?;
        let mut network = SumoNetwork::default();
        for obj in tree.root_element().children() {
            if !obj.is_element() {
                continue;
            }
            match obj.tag_name().name() {
                "edge" => {
                    let edge = SumoEdge::parse(&tree, obj)?;
                    network.edges.push(edge);
                }
                "junction" => {
                    if let Some(junction) = SumoJunction::parse(obj) {
                        network.junctions.push(junction);
                    }
                }
                _ => {}
            }
        }
        Ok(network)
    }

    /// the set of junction ids declared in this network, including internal junctions.
    pub fn junction_ids(&self) -> HashSet<&NodeId> {
        self.junctions.iter().map(|j| &j.id).collect()
    }

    /// edges that take part in routing, i.e. every non-internal edge.
    pub fn routable_edges(&self) -> impl Iterator<Item = &SumoEdge> {
        self.edges.iter().filter(|e| !e.is_internal())
    }
}

impl SumoEdge {
    fn parse(tree: &roxmltree::Document, node: roxmltree::Node) -> Result<SumoEdge, NetworkError> {
        let id = node.attribute("id").ok_or_else(|| {
            let pos = tree.text_pos_at(node.range().start);
            NetworkError::MissingEdgeId(pos.row)
        })?;
        Ok(SumoEdge {
            id: EdgeId::from(id),
            from: node.attribute("from").map(NodeId::from),
            to: node.attribute("to").map(NodeId::from),
            function: EdgeFunction::from_attribute(node.attribute("function")),
            edge_type: node.attribute("type").map(String::from),
        })
    }

    /// internal edges are generated by netconvert to model the interior of
    /// junctions and are excluded from the routable graph.
    pub fn is_internal(&self) -> bool {
        self.function == EdgeFunction::Internal || self.edge_type.as_deref() == Some("internal")
    }
}

impl SumoJunction {
    fn parse(node: roxmltree::Node) -> Option<SumoJunction> {
        let id = node.attribute("id")?;
        Some(SumoJunction {
            id: NodeId::from(id),
            junction_type: node.attribute("type").map(String::from),
        })
    }
}
