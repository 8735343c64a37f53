use crate::{LinePlacement, Network};
use std::fmt::{Display, Error, Formatter};

impl Display for Network {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        // Passthrough lines are sorted by placement, so one pass suffices.
        let mut comments = self.comments.iter().peekable();
        writeln!(f, "VERTICES")?;
        for (index, vertex) in self.vertices.iter().enumerate() {
            while let Some((_, line)) =
                comments.next_if(|(placement, _)| *placement == LinePlacement::Vertex(index))
            {
                writeln!(f, "{}", line)?;
            }
            writeln!(f, "VERTEX {} {}", vertex.id, vertex.name)?;
        }
        while let Some((_, line)) =
            comments.next_if(|(placement, _)| matches!(placement, LinePlacement::Vertex(_)))
        {
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "ENDVERTICES")?;
        for (index, group) in self.edges.iter().enumerate() {
            while let Some((_, line)) =
                comments.next_if(|(placement, _)| *placement == LinePlacement::Edge(index))
            {
                writeln!(f, "{}", line)?;
            }
            write!(f, "EDGES {} (", group.target)?;
            for regulator in &group.regulators {
                write!(f, "{} ", regulator)?;
            }
            writeln!(f, ")")?;
        }
        for (_, line) in comments {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
