//! On-line generalized Ukkonen insertion.
//!
//! The classical single-string algorithm assumes a suffix-link walk never
//! lands on a transition that already exists. In the generalized setting it
//! can, since a previous document may have already laid down that edge. So
//! `update`/`test_and_split` below recognize when that happens and deposit
//! the new document's id on the existing node rather than always creating a
//! fresh leaf.

use crate::edge::{BufferIdx, Label};
use crate::node::NodeIdx;
use crate::span::Span;
use crate::tree::GeneralizedSuffixTree;

impl GeneralizedSuffixTree {
    pub(crate) fn run_builder(&mut self, key: &str, id: u32) {
        self.active_leaf = NodeIdx::root();
        let mut s = NodeIdx::root();
        let mut text = Span::new(0, 0);
        let key_len = key.len();
        let buf = self.new_buffer(key);

        for i in 0..key_len {
            text = Span::new(text.start, i + 1);
            let rest = Span::new(i, key_len);
            let (new_s, new_text) = self.update(s, text, rest, id, buf);
            let (canon_node, canon_span) = self.canonize(new_s, new_text, buf);
            s = canon_node;
            text = canon_span;
        }

        let active_leaf = self.active_leaf;
        if active_leaf != NodeIdx::root()
            && self.node(active_leaf).suffix().is_none()
            && active_leaf != s
        {
            self.node_mut(active_leaf).set_suffix(s);
        }
    }

    /// Implements Ukkonen's inner "extend" loop for one phase (one more
    /// character of `key` consumed). Returns the canonized `(node, remainder)`
    /// the outer loop in `run_builder` should continue from.
    fn update(
        &mut self,
        input_node: NodeIdx,
        string_part: Span,
        rest: Span,
        id: u32,
        buf: BufferIdx,
    ) -> (NodeIdx, Span) {
        let new_char = self.buffer_bytes(buf)[string_part.end - 1];
        let mut s = input_node;
        let mut string_part = string_part;
        let mut old_root = NodeIdx::root();

        let (mut endpoint, mut r) =
            self.test_and_split(s, string_part.without_last(), new_char, rest, id, buf);

        while !endpoint {
            let leaf = match self.node(r).edge(new_char) {
                Some(existing) => self.edge(existing).dest(),
                None => {
                    let substring_length = self.node(r).substring_length() + rest.len();
                    let leaf = self.new_node(substring_length);
                    self.node_mut(leaf).add_own_id(id);
                    let label = Label::new(buf, rest.start, rest.end);
                    let edge = self.new_edge(label, r, leaf);
                    self.node_mut(leaf).set_source_edge(edge);
                    self.node_mut(r).add_edge(new_char, edge);
                    leaf
                }
            };

            if self.active_leaf != NodeIdx::root() {
                self.node_mut(self.active_leaf).set_suffix(leaf);
            }
            self.active_leaf = leaf;

            if old_root != NodeIdx::root() {
                self.node_mut(old_root).set_suffix(r);
            }
            old_root = r;

            if s == NodeIdx::root() {
                string_part = string_part.without_first();
            } else {
                let suffix = self
                    .node(s)
                    .suffix()
                    .expect("non-root active node must already carry a suffix link here");
                let (canon_node, canon_span) = self.canonize(suffix, string_part.without_last(), buf);
                s = canon_node;
                string_part = canon_span.extend_by_one();
            }

            let (e2, r2) = self.test_and_split(s, string_part.without_last(), new_char, rest, id, buf);
            endpoint = e2;
            r = r2;
        }

        if old_root != NodeIdx::root() {
            self.node_mut(old_root).set_suffix(r);
        }

        (s, string_part)
    }

    /// Normalizes `(s, str)` by descending as long as `str` fully contains
    /// the next edge's label.
    fn canonize(&self, mut s: NodeIdx, mut span: Span, buf: BufferIdx) -> (NodeIdx, Span) {
        if span.is_empty() {
            return (s, span);
        }
        loop {
            if span.is_empty() {
                break;
            }
            let c = self.buffer_bytes(buf)[span.start];
            let edge = match self.node(s).edge(c) {
                Some(e) => e,
                None => break,
            };
            let label_len = self.edge(edge).label().len();
            if label_len <= span.len() {
                s = self.edge(edge).dest();
                span = span.advance(label_len);
            } else {
                break;
            }
        }
        (s, span)
    }

    /// Decides whether `t` extends an existing path from `s`, or forces a
    /// split at an implicit position mid-edge.
    /// Returns `(true, node)` when the path already exists past `node`, or
    /// `(false, node)` after splitting (or failing to find a transition) at
    /// `node`.
    fn test_and_split(
        &mut self,
        s: NodeIdx,
        string_part: Span,
        t: u8,
        rest: Span,
        id: u32,
        buf: BufferIdx,
    ) -> (bool, NodeIdx) {
        let (s_prime, tail) = self.canonize(s, string_part, buf);

        if !tail.is_empty() {
            let tail_first = self.buffer_bytes(buf)[tail.start];
            let g = self
                .node(s_prime)
                .edge(tail_first)
                .expect("canonize must land on a real transition when tail is non-empty");
            let label = self.edge(g).label();

            if self.label_bytes(label)[tail.len()] == t {
                return (true, s_prime);
            }

            // Split: the path splits mid-edge between `tail` (already
            // matched) and the rest of `label` (diverges at `t`).
            let r = self.new_node(self.node(s_prime).substring_length() + tail.len());
            let tail_label = Label::new(buf, tail.start, tail.end);
            let r_edge = self.new_edge(tail_label, s_prime, r);
            self.node_mut(r).set_source_edge(r_edge);
            self.node_mut(s_prime).add_edge(tail_first, r_edge);

            let remainder = Label::new(label.buffer(), label.start() + tail.len(), label.end());
            let remainder_first = self.label_bytes(remainder)[0];
            self.edge_mut(g).set_label(remainder);
            self.edge_mut(g).set_source(r);
            self.node_mut(r).add_edge(remainder_first, g);

            (false, r)
        } else {
            match self.node(s_prime).edge(t) {
                None => (false, s_prime),
                Some(e) => {
                    let label = self.edge(e).label();
                    let label_len = label.len();

                    if rest.len() == label_len && self.spans_match(buf, rest, label) {
                        let dest = self.edge(e).dest();
                        self.node_mut(dest).add_own_id(id);
                        (true, s_prime)
                    } else if rest.len() > label_len && self.rest_starts_with_label(buf, rest, label) {
                        (true, s_prime)
                    } else if label_len > rest.len() && self.label_starts_with_rest(buf, rest, label) {
                        let n = self.new_node(self.node(s_prime).substring_length() + rest.len());
                        self.node_mut(n).add_own_id(id);
                        let rest_label = Label::new(buf, rest.start, rest.end);
                        let new_edge = self.new_edge(rest_label, s_prime, n);
                        self.node_mut(n).set_source_edge(new_edge);
                        self.node_mut(s_prime).add_edge(t, new_edge);

                        let demoted = Label::new(label.buffer(), label.start() + rest.len(), label.end());
                        let demoted_first = self.label_bytes(demoted)[0];
                        self.edge_mut(e).set_label(demoted);
                        self.edge_mut(e).set_source(n);
                        self.node_mut(n).add_edge(demoted_first, e);

                        (false, s_prime)
                    } else {
                        (true, s_prime)
                    }
                }
            }
        }
    }

    fn spans_match(&self, buf: BufferIdx, rest: Span, label: Label) -> bool {
        &self.buffer_bytes(buf)[rest.start..rest.end] == self.label_bytes(label)
    }

    fn rest_starts_with_label(&self, buf: BufferIdx, rest: Span, label: Label) -> bool {
        let rest_bytes = &self.buffer_bytes(buf)[rest.start..rest.end];
        rest_bytes.starts_with(self.label_bytes(label))
    }

    fn label_starts_with_rest(&self, buf: BufferIdx, rest: Span, label: Label) -> bool {
        let rest_bytes = &self.buffer_bytes(buf)[rest.start..rest.end];
        self.label_bytes(label).starts_with(rest_bytes)
    }
}
