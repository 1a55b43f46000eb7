//! Deterministic identifier allocation for one emission pass.
//!
//! Each emitter creates its own [`IdAllocator`] when it starts walking a
//! document and drops it when done. Counters start at 1 and are never shared
//! between passes, so emitting the same document twice yields the same names.

/// Identifiers allocated for one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionIds {
    /// 1-based section ordinal.
    pub index: u32,
    /// Page layout name, `Mpm{n}`.
    pub page_layout: String,
    /// Master page name, `Standard{n}`.
    pub master_page: String,
    /// Per-section paragraph style name, `SB{n}`.
    pub section_style: String,
}

/// Sequential counters scoped to one emission pass.
#[derive(Debug)]
pub struct IdAllocator {
    next_section: u32,
    next_relationship: u32,
    next_header: u32,
    next_footer: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            next_section: 1,
            next_relationship: 1,
            next_header: 1,
            next_footer: 1,
        }
    }

    /// Allocate the names for the next section in document order.
    pub fn begin_section(&mut self) -> SectionIds {
        let n = self.next_section;
        self.next_section += 1;
        SectionIds {
            index: n,
            page_layout: format!("Mpm{n}"),
            master_page: format!("Standard{n}"),
            section_style: format!("SB{n}"),
        }
    }

    /// Next package relationship id, `rId{n}`.
    pub fn relationship(&mut self) -> String {
        let n = self.next_relationship;
        self.next_relationship += 1;
        format!("rId{n}")
    }

    /// Next header part number.
    pub fn header_part(&mut self) -> u32 {
        let n = self.next_header;
        self.next_header += 1;
        n
    }

    /// Next footer part number.
    pub fn footer_part(&mut self) -> u32 {
        let n = self.next_footer;
        self.next_footer += 1;
        n
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
