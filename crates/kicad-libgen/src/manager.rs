//! Footprint blocks of a `.kicad_pcb` board, keyed by reference designator
//!
//! Blocks are located by balancing parentheses from each `(footprint`
//! opening, so everything outside the block being replaced is left
//! byte-for-byte as it was.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::{Captures, Regex};

static REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\(property\s+"Reference"\s+"([^"]+)""#).unwrap());

/// A model header, the whitespace after it and an existing hide flag
static MODEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\(model\s+"[^"]*")(\s+)(\(\s*hide\s+yes\s*\)\s*)?"#).unwrap()
});

/// One `(footprint ...)` block
#[derive(Debug, Clone, PartialEq)]
pub struct FootprintBlock {
    pub reference: String,
    pub text: String,
    /// Byte offset of the opening parenthesis
    pub start: usize,
    /// Byte offset just past the closing parenthesis
    pub end: usize,
}

/// Parsed board text
#[derive(Debug, Clone)]
pub struct PcbFile {
    content: String,
    footprints: BTreeMap<String, FootprintBlock>,
}

/// End offset of the balanced expression opening at `start`, skipping
/// quoted strings
pub(crate) fn balanced_end(content: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (offset, ch) in content[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(start + offset + 1);
                }
            }
            _ => {}
        }
    }
    None
}

impl PcbFile {
    /// Read and index a `.kicad_pcb` file
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read PCB file: {}", path.display()))?;
        Ok(Self::parse(content))
    }

    /// Index every footprint block that carries a Reference property.
    ///
    /// A later block with the same reference replaces an earlier one.
    pub fn parse(content: String) -> Self {
        let mut footprints = BTreeMap::new();
        let mut cursor = 0;
        while let Some(found) = content[cursor..].find("(footprint") {
            let start = cursor + found;
            let after = content[start + "(footprint".len()..].chars().next();
            if !after.is_some_and(char::is_whitespace) {
                cursor = start + 1;
                continue;
            }
            let Some(end) = balanced_end(&content, start) else {
                log::warn!("Unbalanced footprint block at byte {start}");
                break;
            };
            let text = &content[start..end];
            if let Some(caps) = REFERENCE.captures(text) {
                let reference = caps[1].to_string();
                footprints.insert(
                    reference.clone(),
                    FootprintBlock {
                        reference,
                        text: text.to_string(),
                        start,
                        end,
                    },
                );
            }
            cursor = end;
        }
        log::debug!("Indexed {} footprints", footprints.len());
        Self {
            content,
            footprints,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.footprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.footprints.is_empty()
    }

    /// Reference designators in sorted order
    pub fn references(&self) -> Vec<&str> {
        self.footprints.keys().map(String::as_str).collect()
    }

    pub fn block(&self, reference: &str) -> Result<&FootprintBlock> {
        self.footprints.get(reference).with_context(|| {
            format!(
                "No footprint found with reference: {reference}. Available references: {}",
                self.references().join(", ")
            )
        })
    }

    /// Text of the footprint block for `reference`
    pub fn extract(&self, reference: &str) -> Result<&str> {
        Ok(&self.block(reference)?.text)
    }

    /// Board text with the block for `reference` swapped for `new_block`
    pub fn replace(&self, reference: &str, new_block: &str) -> Result<String> {
        let block = self.block(reference)?;
        let mut out = String::with_capacity(self.content.len() + new_block.len());
        out.push_str(&self.content[..block.start]);
        out.push_str(new_block);
        out.push_str(&self.content[block.end..]);
        Ok(out)
    }
}

/// True if any model in `block` is already hidden
pub fn model_hidden(block: &str) -> bool {
    MODEL.captures_iter(block).any(|caps| caps.get(3).is_some())
}

/// Add `(hide yes)` to every visible model in `block`.
///
/// Models that are already hidden are left alone, so applying this twice
/// gives the same text as applying it once.
pub fn hide_model(block: &str) -> String {
    if !MODEL.is_match(block) {
        log::warn!("Footprint has no model section");
        return block.to_string();
    }
    if model_hidden(block) {
        log::warn!("This footprint already has (hide yes) in the model section");
    }
    MODEL
        .replace_all(block, |caps: &Captures| {
            if caps.get(3).is_some() {
                caps[0].to_string()
            } else {
                format!("{}{}(hide yes){}", &caps[1], &caps[2], &caps[2])
            }
        })
        .into_owned()
}

/// Remove `(hide yes)` from every model in `block`
pub fn show_model(block: &str) -> String {
    if !model_hidden(block) {
        log::info!("Note: this footprint does not have (hide yes) in the model section");
        return block.to_string();
    }
    MODEL
        .replace_all(block, |caps: &Captures| format!("{}{}", &caps[1], &caps[2]))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const BOARD: &str = "(kicad_pcb\n\t(version 20240108)\n\t(footprint \"R_0402\"\n\t\t(layer \"F.Cu\")\n\t\t(property \"Reference\" \"R1\"\n\t\t\t(at 0 -1 0)\n\t\t)\n\t\t(property \"Value\" \"10k (1%)\")\n\t\t(model \"${KIPRJMOD}/R_0402.step\"\n\t\t\t(offset\n\t\t\t\t(xyz 0 0 0)\n\t\t\t)\n\t\t)\n\t)\n\t(footprint \"C_0603\"\n\t\t(property \"Reference\" \"C7\")\n\t\t(model \"C_0603.step\" (offset (xyz 0 0 0)))\n\t)\n\t(footprint \"MountingHole\"\n\t\t(layer \"F.Cu\")\n\t)\n)\n";

    #[test]
    fn test_parse_indexes_referenced_blocks() {
        let pcb = PcbFile::parse(BOARD.to_string());
        assert_eq!(pcb.references(), vec!["C7", "R1"]);

        let r1 = pcb.block("R1").unwrap();
        assert!(r1.text.starts_with("(footprint \"R_0402\""));
        assert!(r1.text.ends_with("\t\t)\n\t)"));
        assert_eq!(&BOARD[r1.start..r1.end], r1.text);
    }

    #[test]
    fn test_extract_then_replace_is_identity() {
        let pcb = PcbFile::parse(BOARD.to_string());
        for reference in pcb.references() {
            let block = pcb.extract(reference).unwrap();
            assert_eq!(pcb.replace(reference, block).unwrap(), BOARD);
        }
    }

    #[test]
    fn test_unknown_reference_lists_available() {
        let pcb = PcbFile::parse(BOARD.to_string());
        let err = pcb.extract("U2").unwrap_err().to_string();
        assert!(err.contains("No footprint found with reference: U2"));
        assert!(err.contains("C7, R1"));
    }

    #[test]
    fn test_hide_is_idempotent() {
        let pcb = PcbFile::parse(BOARD.to_string());
        let block = pcb.extract("R1").unwrap();

        let hidden = hide_model(block);
        assert!(hidden.contains("(model \"${KIPRJMOD}/R_0402.step\"\n\t\t\t(hide yes)\n\t\t\t(offset"));
        assert_eq!(hide_model(&hidden), hidden);
        assert_eq!(hidden.matches("(hide yes)").count(), 1);
    }

    #[test]
    fn test_show_undoes_hide() {
        let pcb = PcbFile::parse(BOARD.to_string());
        for reference in ["R1", "C7"] {
            let block = pcb.extract(reference).unwrap();
            let hidden = hide_model(block);
            assert!(model_hidden(&hidden));
            assert_eq!(show_model(&hidden), block);
            assert_eq!(show_model(block), block);
        }
        let c7 = hide_model(pcb.extract("C7").unwrap());
        assert!(c7.contains("(model \"C_0603.step\" (hide yes) (offset"));
    }

    #[test]
    fn test_read_and_replace_on_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("board.kicad_pcb");
        fs::write(&path, BOARD).unwrap();

        let pcb = PcbFile::read(&path).unwrap();
        let updated = pcb.replace("R1", &hide_model(pcb.extract("R1").unwrap())).unwrap();
        fs::write(&path, &updated).unwrap();

        let reread = PcbFile::read(&path).unwrap();
        assert!(model_hidden(reread.extract("R1").unwrap()));
        assert!(!model_hidden(reread.extract("C7").unwrap()));
        assert_eq!(reread.extract("C7").unwrap(), pcb.extract("C7").unwrap());
    }
}
