//! Turns a code tree into the symbol to bitstring table used by the encoder, and rebuilds
//! tables from their persisted form.
//!
//! Codes are text made of '0' and '1'. A left branch appends '0' and a right branch
//! appends '1'. A tree made of a single leaf has no branches, so its only symbol gets "0".

use std::collections::BTreeMap;

use log::trace;

use super::huffman::{Node, NodeData};
use crate::error::{HuffError, Result};
use crate::tools::symbol_map::Symbol;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S> {
    codes: BTreeMap<S, String>,
}

impl<S: Symbol> CodeTable<S> {
    /// Walk the tree depth first and record the path to every leaf.
    pub fn from_tree(root: &Node<S>) -> Self {
        let mut codes = BTreeMap::new();
        match &root.node_data {
            NodeData::Leaf(sym) => {
                codes.insert(*sym, "0".to_string());
            }
            NodeData::Kids(..) => return_leaves(root, &mut String::new(), &mut codes),
        }
        Self { codes }
    }

    /// Rebuild a table from persisted (key, code) pairs. Every key must be a valid symbol,
    /// every code a non-empty bitstring, and the whole set prefix-free.
    pub fn from_codes<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, String)>,
    {
        let mut codes = BTreeMap::new();
        for (key, code) in pairs {
            let sym = S::from_key(key).ok_or_else(|| {
                HuffError::MalformedContainer(format!("{} is not a valid symbol", key))
            })?;
            if code.is_empty() || !code.bytes().all(|b| b == b'0' || b == b'1') {
                return Err(HuffError::MalformedContainer(format!(
                    "invalid code {:?} for symbol {}",
                    code, key
                )));
            }
            if codes.insert(sym, code).is_some() {
                return Err(HuffError::MalformedContainer(format!(
                    "symbol {} listed twice",
                    key
                )));
            }
        }
        if codes.is_empty() {
            return Err(HuffError::MalformedContainer("code table is empty".into()));
        }
        let table = Self { codes };
        if !table.is_prefix_free() {
            return Err(HuffError::MalformedContainer(
                "code table is not prefix-free".into(),
            ));
        }
        Ok(table)
    }

    pub fn get(&self, sym: S) -> Option<&str> {
        self.codes.get(&sym).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (S, &str)> {
        self.codes.iter().map(|(s, c)| (*s, c.as_str()))
    }

    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(String::len).max().unwrap_or(0)
    }

    /// True when no code is a prefix of (or equal to) another.
    pub fn is_prefix_free(&self) -> bool {
        // Once sorted, a code that prefixes anything also prefixes its successor.
        let mut sorted = self.codes.values().map(String::as_str).collect::<Vec<_>>();
        sorted.sort_unstable();
        sorted.windows(2).all(|w| !w[1].starts_with(w[0]))
    }

    /// The table keyed by the integer form of each symbol.
    pub fn to_keyed(&self) -> BTreeMap<u32, String> {
        self.codes
            .iter()
            .map(|(s, c)| (s.key(), c.clone()))
            .collect()
    }
}

/// Recursively walk the tree, extending `path` on the way down.
fn return_leaves<S: Symbol>(node: &Node<S>, path: &mut String, codes: &mut BTreeMap<S, String>) {
    match &node.node_data {
        NodeData::Kids(left, right) => {
            path.push('0');
            return_leaves(left, path, codes);
            path.pop();
            path.push('1');
            return_leaves(right, path, codes);
            path.pop();
        }
        NodeData::Leaf(sym) => {
            trace!("Symbol {} gets code {}", sym.key(), path);
            codes.insert(*sym, path.clone());
        }
    };
}
