// world_core/src/storage/world_storage.rs
use std::fs;
use std::io;
use std::io::{Error, ErrorKind};
use std::path::Path;
use ron::ser::{PrettyConfig, to_string_pretty};
use crate::constants::GRAPH_RON;
use crate::world::world_graph::WorldGraph;

/// Load the authored world graph .ron from a folder.
pub fn load_graph_from_folder(folder: &Path) -> io::Result<WorldGraph> {
    let path = folder.join(GRAPH_RON);
    let ron_string = fs::read_to_string(path)?;

    // Parse the RON
    match ron::from_str::<WorldGraph>(&ron_string) {
        Ok(mut graph) => {
            // Authored files may predate edits elsewhere in the graph.
            graph.sync_passage_selectors();
            Ok(graph)
        }
        // Corrupt file
        Err(e) => Err(Error::new(ErrorKind::InvalidData, e)),
    }
}

/// Save the world graph .ron into a folder.
pub fn save_graph_to_folder(folder: &Path, graph: &WorldGraph) -> io::Result<()> {
    fs::create_dir_all(folder)?;
    let path = folder.join(GRAPH_RON);

    let ron_string = to_string_pretty(graph, PrettyConfig::default())
        .map_err(|e| Error::new(ErrorKind::InvalidData, e))?;
    fs::write(path, ron_string)
}
