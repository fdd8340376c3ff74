//! Flattened, selectable rendering of the document tree.

use dropdom::{Document, NodeId};
use dropdown::{DispatchReport, Host};

use crate::terminal::Line;

const HELP: &str = "up/down select  enter click  o over  l leave  d detach  a attach  q quit";

/// A visible element and its depth below the root.
#[derive(Debug, Clone, Copy)]
pub struct Row {
    pub node: NodeId,
    pub depth: usize,
}

/// Every element under the root, in document order.
pub fn rows(doc: &Document) -> Vec<Row> {
    let root = doc.root();
    doc.descendants(root)
        .into_iter()
        .map(|node| Row {
            node,
            // Ancestors include the root itself.
            depth: doc.ancestors(node).len() - 1,
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct View {
    pub selected: usize,
    pub status: String,
}

impl View {
    pub fn select_next(&mut self, rows: &[Row]) {
        if self.selected + 1 < rows.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_node(&self, rows: &[Row]) -> Option<NodeId> {
        rows.get(self.selected).map(|r| r.node)
    }

    pub fn report(&mut self, what: &str, report: DispatchReport) {
        self.status = match report.stopped_at {
            Some(stop) => format!(
                "{what}: {} listener(s), propagation stopped at {stop:?}",
                report.invoked
            ),
            None => format!("{what}: {} listener(s)", report.invoked),
        };
    }

    pub fn lines(&self, host: &Host, rows: &[Row]) -> Vec<Line> {
        let doc = host.document();
        let mut lines = vec![Line::plain(HELP), Line::plain(self.status.clone()), Line::default()];

        for (index, row) in rows.iter().enumerate() {
            let tag = doc.tag(row.node).unwrap_or("?");
            let marker = if host.widget_at(row.node).is_some() { "*" } else { " " };
            let text = doc.text(row.node).map(|t| format!(" {t:?}")).unwrap_or_default();
            lines.push(Line {
                text: format!(
                    "{marker}{}<{tag}{}>{text}",
                    "  ".repeat(row.depth),
                    doc.describe_attributes(row.node)
                ),
                highlighted: index == self.selected,
            });
        }

        lines
    }
}
