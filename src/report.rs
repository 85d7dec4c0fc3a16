//! Group output.
//!
//! Layout: one line per group in group order; the names of its members in member order,
//! separated by `,`; each line terminated by `\n`. A member's name is its input label, or
//! its 0-based index when the record had none.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::groups::Group;
use crate::point_set::PointSet;

/// Write `groups` to `sink`. The first write error aborts the whole emit.
pub fn emit<W: Write>(groups: &[Group], points: &PointSet, sink: &mut W) -> io::Result<()> {
    for group in groups {
        let mut first = true;
        for &member in &group.members {
            if !first {
                sink.write_all(b",")?;
            }
            first = false;
            sink.write_all(points.name(member).as_bytes())?;
        }
        sink.write_all(b"\n")?;
    }
    Ok(())
}

/// Render the groups to a string, mainly for tests and logging.
pub fn render(groups: &[Group], points: &PointSet) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = emit(groups, points, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Create `path` and write the groups into it.
///
/// On a write failure whatever was buffered before the failure is flushed (best effort) and
/// the error is returned; the file must then be treated as incomplete.
pub fn write_groups_file(path: impl AsRef<Path>, groups: &[Group], points: &PointSet) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);

    if let Err(e) = emit(groups, points, &mut writer) {
        let _ = writer.flush();
        return Err(Error::io(path, e));
    }
    writer.flush().map_err(|e| Error::io(path, e))
}
