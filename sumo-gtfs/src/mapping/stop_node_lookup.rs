use super::{read_stop_node_rows, StopNodeRow};
use crate::{network::NodeId, schedule::StopId, table::TableError};
use std::{
    collections::{BTreeSet, HashMap},
    path::Path,
};

/// partial function from normalized stop id to SUMO junction id.
#[derive(Debug, Default, Clone)]
pub struct StopNodeLookup {
    lookup: HashMap<StopId, NodeId>,
}

impl StopNodeLookup {
    /// loads the lookup from a stop to node table file.
    pub fn from_file(filepath: &Path, stop_id_delimiter: &str) -> Result<StopNodeLookup, TableError> {
        let rows = read_stop_node_rows(filepath)?;
        Ok(StopNodeLookup::from_rows(&rows, stop_id_delimiter))
    }

    /// builds the lookup from table rows. stop ids are normalized with
    /// `stop_id_delimiter`. rows without a node id are skipped and, when a
    /// stop id repeats, the last row wins.
    pub fn from_rows(rows: &[StopNodeRow], stop_id_delimiter: &str) -> StopNodeLookup {
        let mut lookup: HashMap<StopId, NodeId> = HashMap::new();
        let mut unmatched: usize = 0;
        for row in rows.iter() {
            match row.matched_node_id() {
                Some(node_id) => {
                    let stop_id = StopId::normalized(&row.stop_id, stop_id_delimiter);
                    lookup.insert(stop_id, NodeId::from(node_id));
                }
                None => unmatched += 1,
            }
        }
        if unmatched > 0 {
            log::warn!("skipped {unmatched} stop to node rows without a node id");
        }
        log::info!("loaded stop to node lookup with {} stops", lookup.len());
        StopNodeLookup { lookup }
    }

    pub fn get(&self, stop_id: &StopId) -> Option<&NodeId> {
        self.lookup.get(stop_id)
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// every stop and its node, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&StopId, &NodeId)> {
        self.lookup.iter()
    }

    pub fn stop_ids(&self) -> impl Iterator<Item = &StopId> {
        self.lookup.keys()
    }

    /// the distinct node ids referenced by the lookup.
    pub fn node_ids(&self) -> BTreeSet<&NodeId> {
        self.lookup.values().collect()
    }
}

impl FromIterator<(StopId, NodeId)> for StopNodeLookup {
    fn from_iter<T: IntoIterator<Item = (StopId, NodeId)>>(iter: T) -> Self {
        StopNodeLookup {
            lookup: iter.into_iter().collect(),
        }
    }
}
