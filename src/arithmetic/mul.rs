//! Scalar multiplication engines.
//!
//! Two Booth-recoded windowed engines share the arithmetic core:
//!
//! - a width-7 fixed-base engine walking 37 precomputed rows of 64 affine
//!   multiples, one mixed addition per row and no doublings at all;
//! - a width-5 variable-point engine that builds a 16-entry Jacobian table
//!   per input point and processes the scalars top-down, five doublings per
//!   round, sharing the doubling chain across all points of a batch.
//!
//! Table entries are laid out as limb planes and every access sweeps the
//! whole table, so the secret window digit never selects a memory address.

use super::{field::FieldElement, projective::ProjectivePoint};
use crate::{AffinePoint, Scalar};
use elliptic_curve::subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

#[cfg(feature = "alloc")]
use alloc::sync::Arc;

#[cfg(feature = "precomputed-tables")]
mod basepoint;

/// Booth recoding of a `(width + 1)`-bit window value into a signed digit,
/// packed as `(|digit| << 1) | sign`.
///
/// The top bit of the window decides whether the digit is taken as-is or as
/// its complement borrowing one from the next window, which halves the
/// required table size: digits land in `[-2^(width-1), 2^(width-1)]` and a
/// zero window maps to digit 0, the empty table slot. `width` is a public
/// parameter; the recoding itself is branch-free.
const fn booth_recode(wvalue: u32, width: u32) -> u32 {
    let s = !((wvalue >> width).wrapping_sub(1));
    let d = (1u32 << (width + 1)) - wvalue - 1;
    let d = (d & s) | (wvalue & !s);
    let d = (d >> 1) + (d & 1);
    (d << 1) + (s & 1)
}

/// All-ones mask when `index == value`, all-zeros otherwise.
#[inline(always)]
fn eq_mask(index: u64, value: u64) -> u64 {
    u64::conditional_select(&0, &u64::MAX, index.ct_eq(&value))
}

/// Width-5 window table: the Jacobian points 1P..16P, interleaved across
/// twelve limb planes of 16 entries (X, Y then Z limbs) so a gather touches
/// every word of the table. Aligned so the sweep stays on whole cache lines.
#[derive(Clone, Copy)]
#[repr(align(32))]
struct WindowTable([[u64; 16]; 12]);

impl WindowTable {
    const EMPTY: Self = Self([[0; 16]; 12]);

    /// Build the table for `p` by the fixed doubling/addition schedule
    /// 1, 2, 3, 4, 6, 5, 7, 8, 12, 10, 14, 13, 11, 15, 9, 16. Every
    /// addition pairs distinct non-inverse multiples, so the degenerate
    /// branch of the point addition can never fire here.
    fn new(p: &ProjectivePoint) -> Self {
        let mut table = Self::EMPTY;

        let t0 = *p;
        table.scatter(&t0, 1);
        let mut t1 = t0.double();
        table.scatter(&t1, 2);
        let mut t2 = t1.add(&t0);
        table.scatter(&t2, 3);
        t1 = t1.double();
        table.scatter(&t1, 4);
        t2 = t2.double();
        table.scatter(&t2, 6);
        let mut t3 = t1.add(&t0);
        table.scatter(&t3, 5);
        let mut t4 = t2.add(&t0);
        table.scatter(&t4, 7);
        t1 = t1.double();
        table.scatter(&t1, 8);
        t2 = t2.double();
        table.scatter(&t2, 12);
        t3 = t3.double();
        table.scatter(&t3, 10);
        t4 = t4.double();
        table.scatter(&t4, 14);
        t2 = t2.add(&t0);
        table.scatter(&t2, 13);
        t3 = t3.add(&t0);
        table.scatter(&t3, 11);
        t4 = t4.add(&t0);
        table.scatter(&t4, 15);
        t2 = t1.add(&t0);
        table.scatter(&t2, 9);
        t1 = t1.double();
        table.scatter(&t1, 16);

        table
    }

    /// Store `p` at logical index `idx` (1..=16). Index 0 is implicitly the
    /// point at infinity and never stored.
    fn scatter(&mut self, p: &ProjectivePoint, idx: usize) {
        debug_assert!((1..=16).contains(&idx));
        let slot = idx - 1;
        for l in 0..4 {
            self.0[l][slot] = p.x.0[l];
            self.0[4 + l][slot] = p.y.0[l];
            self.0[8 + l][slot] = p.z.0[l];
        }
    }

    /// Read the entry at logical index `idx` (0..=16), touching every word
    /// of the table regardless of the index. Index 0 yields the point at
    /// infinity (all-zero Z).
    fn gather(&self, idx: u32) -> ProjectivePoint {
        let mut limbs = [0u64; 12];
        for slot in 0..16 {
            let mask = eq_mask(slot as u64 + 1, idx.into());
            for l in 0..12 {
                limbs[l] |= self.0[l][slot] & mask;
            }
        }
        ProjectivePoint {
            x: FieldElement([limbs[0], limbs[1], limbs[2], limbs[3]]),
            y: FieldElement([limbs[4], limbs[5], limbs[6], limbs[7]]),
            z: FieldElement([limbs[8], limbs[9], limbs[10], limbs[11]]),
        }
    }
}

/// One row of a fixed-base table: 64 affine points as eight limb planes
/// (the four X limbs followed by the four Y limbs).
type W7Row = [u64; 512];

/// Store an affine point at logical index `idx` (1..=64) of a fixed-base
/// row. Infinity is the implicit index 0 and never stored.
fn scatter_w7(row: &mut W7Row, p: &AffinePoint, idx: usize) {
    debug_assert!((1..=64).contains(&idx));
    let slot = idx - 1;
    for l in 0..4 {
        row[l * 64 + slot] = p.x.0[l];
        row[(4 + l) * 64 + slot] = p.y.0[l];
    }
}

/// Read the affine point at logical index `idx` (0..=64) of a fixed-base
/// row with a full sweep of the row. Index 0 comes back as the all-zero
/// pair, which decodes to the point at infinity.
fn gather_w7(row: &W7Row, idx: u32) -> AffinePoint {
    let mut limbs = [0u64; 8];
    for slot in 0..64 {
        let mask = eq_mask(slot as u64 + 1, idx.into());
        for l in 0..8 {
            limbs[l] |= row[l * 64 + slot] & mask;
        }
    }
    let x = FieldElement([limbs[0], limbs[1], limbs[2], limbs[3]]);
    let y = FieldElement([limbs[4], limbs[5], limbs[6], limbs[7]]);
    let infinity = x.is_zero() & y.is_zero();
    AffinePoint {
        x,
        y,
        infinity: u8::conditional_select(&0, &1, infinity),
    }
}

/// Negate the y-coordinate when the Booth sign bit is set.
#[inline]
fn conditional_negate_y(y: FieldElement, recoded: u32) -> FieldElement {
    FieldElement::conditional_select(&y, &-y, Choice::from((recoded & 1) as u8))
}

/// Precomputed multiples of a fixed base point: 37 rows of 64 affine
/// points, row `j` holding `(k + 1) · 2^(7·j) · B` for `k` in `0..64`.
///
/// The payload is immutable once built; [`GeneratorTables::precompute`]
/// shares it behind an atomic reference count.
#[derive(Clone)]
#[repr(align(64))]
pub struct GeneratorTables([W7Row; 37]);

impl GeneratorTables {
    /// Build the tables for an arbitrary base point.
    ///
    /// Walks each of the 64 columns through the 37 rows, normalizing to
    /// affine before every scatter. Public data only; runs once per group.
    pub fn new(generator: &AffinePoint) -> Self {
        let mut rows = [[0u64; 512]; 37];

        let mut column = ProjectivePoint::from(generator);
        for k in 1..=64 {
            let mut entry = column;
            for row in rows.iter_mut() {
                scatter_w7(row, &entry.to_affine(), k);
                for _ in 0..7 {
                    entry = entry.double();
                }
            }
            column = column.add_mixed(generator);
        }

        Self(rows)
    }

    /// Returns a shared handle to freshly built tables, or `None` when
    /// `generator` is the canonical SM2 base point, for which the built-in
    /// static tables are already used.
    #[cfg(feature = "alloc")]
    pub fn precompute(generator: &AffinePoint) -> Option<Arc<Self>> {
        if generator == &AffinePoint::GENERATOR {
            return None;
        }
        Some(Arc::new(Self::new(generator)))
    }

    /// Fixed-base multiplication: `k · B`.
    ///
    /// The scalar is consumed in 37 Booth windows of seven bits. Row `j`
    /// already holds multiples scaled by `2^(7·j)`, so the whole walk is
    /// one gather, one conditional negation and one mixed addition per
    /// row, with no doublings in between.
    pub fn mul(&self, k: &Scalar) -> ProjectivePoint {
        const WINDOW: usize = 7;
        const MASK: u32 = (1 << (WINDOW + 1)) - 1;

        let p_str = k.to_le_padded();

        // First window, shifted left one bit for the Booth encoding.
        let wvalue = (u32::from(p_str[0]) << 1) & MASK;
        let recoded = booth_recode(wvalue, 7);
        let mut t = gather_w7(&self.0[0], recoded >> 1);
        t.y = conditional_negate_y(t.y, recoded);
        let mut acc = ProjectivePoint::from(t);

        let mut idx = WINDOW;
        for row in &self.0[1..] {
            let off = (idx - 1) / 8;
            let wvalue = u32::from(p_str[off]) | (u32::from(p_str[off + 1]) << 8);
            let wvalue = (wvalue >> ((idx - 1) % 8)) & MASK;
            idx += WINDOW;

            let recoded = booth_recode(wvalue, 7);
            let mut t = gather_w7(row, recoded >> 1);
            t.y = conditional_negate_y(t.y, recoded);
            acc = acc.add_mixed(&t);
        }

        acc
    }
}

/// Shared-doubling windowed multiplication: `Σ kᵢ · Pᵢ` over width-5 Booth
/// windows. The accumulator is seeded from the topmost window (256 mod 5 is
/// a single bit, so the seed digit is never negative), then each round adds
/// one digit per point and doubles five times.
fn windowed_mul<const N: usize>(points_and_scalars: &[(ProjectivePoint, Scalar); N]) -> ProjectivePoint {
    const WINDOW: usize = 5;
    const MASK: u32 = (1 << (WINDOW + 1)) - 1;

    let mut tables = [WindowTable::EMPTY; N];
    let mut p_str = [[0u8; 33]; N];
    for (i, (point, scalar)) in points_and_scalars.iter().enumerate() {
        tables[i] = WindowTable::new(point);
        p_str[i] = scalar.to_le_padded();
    }

    let mut idx: usize = 255;
    let off = (idx - 1) / 8;
    let wvalue = (u32::from(p_str[0][off]) >> ((idx - 1) % 8)) & MASK;
    let recoded = booth_recode(wvalue, 5);
    debug_assert_eq!(recoded & 1, 0);
    let mut acc = tables[0].gather(recoded >> 1);

    while idx >= WINDOW {
        for i in 0..N {
            // The first point's window at the top position seeded the
            // accumulator; the skip is on a public loop counter.
            if idx == 255 && i == 0 {
                continue;
            }
            let off = (idx - 1) / 8;
            let wvalue = u32::from(p_str[i][off]) | (u32::from(p_str[i][off + 1]) << 8);
            let wvalue = (wvalue >> ((idx - 1) % 8)) & MASK;

            let recoded = booth_recode(wvalue, 5);
            let mut t = tables[i].gather(recoded >> 1);
            t.y = conditional_negate_y(t.y, recoded);
            acc = acc.add(&t);
        }

        idx -= WINDOW;
        acc = acc.double().double().double().double().double();
    }

    // Trailing partial window, shifted for Booth like the fixed engine's
    // first window; no doubling follows it.
    for i in 0..N {
        let wvalue = (u32::from(p_str[i][0]) << 1) & MASK;
        let recoded = booth_recode(wvalue, 5);
        let mut t = tables[i].gather(recoded >> 1);
        t.y = conditional_negate_y(t.y, recoded);
        acc = acc.add(&t);
    }

    acc
}

/// Variable-point multiplication: `k · P`.
pub(crate) fn mul(point: &ProjectivePoint, k: &Scalar) -> ProjectivePoint {
    windowed_mul(&[(*point, *k)])
}

/// Fixed-base multiplication against the built-in generator tables, or the
/// variable-point engine when the tables are compiled out.
pub(crate) fn mul_by_generator(k: &Scalar) -> ProjectivePoint {
    #[cfg(feature = "precomputed-tables")]
    {
        GENERATOR_TABLES.mul(k)
    }
    #[cfg(not(feature = "precomputed-tables"))]
    {
        mul(&ProjectivePoint::GENERATOR, k)
    }
}

/// Multi-point linear combination `Σ kᵢ · Pᵢ`.
///
/// Terms whose point is the canonical generator are routed through the
/// fixed-base tables; pairs of variable points share one doubling chain.
/// The generator comparison is on public points only.
pub(crate) fn lincomb(points_and_scalars: &[(ProjectivePoint, Scalar)]) -> ProjectivePoint {
    match points_and_scalars {
        [] => ProjectivePoint::IDENTITY,
        [(point, scalar)] => mul_term(point, scalar),
        [a, b] => lincomb2(a, b),
        rest => rest
            .iter()
            .fold(ProjectivePoint::IDENTITY, |acc, (point, scalar)| {
                acc.add(&mul_term(point, scalar))
            }),
    }
}

fn mul_term(point: &ProjectivePoint, scalar: &Scalar) -> ProjectivePoint {
    if point == &ProjectivePoint::GENERATOR {
        mul_by_generator(scalar)
    } else {
        mul(point, scalar)
    }
}

fn lincomb2(
    a: &(ProjectivePoint, Scalar),
    b: &(ProjectivePoint, Scalar),
) -> ProjectivePoint {
    let a_is_generator = a.0 == ProjectivePoint::GENERATOR;
    let b_is_generator = b.0 == ProjectivePoint::GENERATOR;

    if a_is_generator && !b_is_generator {
        mul_by_generator(&a.1).add(&mul(&b.0, &b.1))
    } else if b_is_generator && !a_is_generator {
        mul_by_generator(&b.1).add(&mul(&a.0, &a.1))
    } else {
        windowed_mul(&[*a, *b])
    }
}

/// Built-in tables for the canonical generator, generated offline.
#[cfg(feature = "precomputed-tables")]
pub(crate) static GENERATOR_TABLES: GeneratorTables = GeneratorTables(basepoint::GENERATOR_TABLE);

#[cfg(test)]
mod tests {
    use super::{WindowTable, booth_recode, gather_w7, scatter_w7};
    use crate::{AffinePoint, ProjectivePoint, Scalar};
    use elliptic_curve::group::Group;

    /// The signed digit a Booth window must decode to.
    fn booth_reference(wvalue: u32, width: u32) -> i32 {
        let lo = ((wvalue >> 1) + (wvalue & 1)) as i32;
        if wvalue < (1 << width) {
            lo
        } else {
            lo - (1 << width)
        }
    }

    #[test]
    fn booth_recode_all_widths() {
        for width in 4..=7u32 {
            for wvalue in 0..(1u32 << (width + 1)) {
                let recoded = booth_recode(wvalue, width);
                let magnitude = (recoded >> 1) as i32;
                let digit = if recoded & 1 == 1 { -magnitude } else { magnitude };
                assert_eq!(digit, booth_reference(wvalue, width), "w={width} v={wvalue}");
            }
        }
    }

    #[test]
    fn window_table_consistency() {
        let p = ProjectivePoint::GENERATOR;
        let table = WindowTable::new(&p);

        let mut expected = ProjectivePoint::IDENTITY;
        for idx in 1..=16u32 {
            expected = expected.add(&p);
            assert_eq!(table.gather(idx), expected, "entry {idx}");
        }

        assert!(bool::from(table.gather(0).is_identity()));
    }

    #[test]
    fn w7_scatter_gather_round_trip() {
        let mut row = [0u64; 512];
        let g = AffinePoint::GENERATOR;
        let g2 = ProjectivePoint::GENERATOR.double().to_affine();

        scatter_w7(&mut row, &g, 1);
        scatter_w7(&mut row, &g2, 37);

        assert_eq!(gather_w7(&row, 1), g);
        assert_eq!(gather_w7(&row, 37), g2);
        assert!(bool::from(gather_w7(&row, 0).is_identity()));
        assert!(bool::from(gather_w7(&row, 2).is_identity()));
    }

    #[test]
    #[cfg(feature = "precomputed-tables")]
    fn static_tables_match_driver() {
        let built = super::GeneratorTables::new(&AffinePoint::GENERATOR);
        for (j, (built_row, static_row)) in built
            .0
            .iter()
            .zip(super::GENERATOR_TABLES.0.iter())
            .enumerate()
        {
            assert_eq!(built_row.as_slice(), static_row.as_slice(), "row {j}");
        }
    }

    #[test]
    #[cfg(feature = "precomputed-tables")]
    fn fixed_and_variable_engines_agree() {
        for k in [Scalar::from(1u64), Scalar::from(2u64), Scalar::from(0xdeadbeefu64), -Scalar::from(1u64)] {
            let fixed = super::mul_by_generator(&k);
            let variable = super::mul(&ProjectivePoint::GENERATOR, &k);
            assert_eq!(fixed, variable);
        }
    }

    #[test]
    fn mul_by_zero_is_identity() {
        assert!(bool::from(
            super::mul(&ProjectivePoint::GENERATOR, &Scalar::ZERO).is_identity()
        ));
        assert!(bool::from(super::mul_by_generator(&Scalar::ZERO).is_identity()));
    }

    #[test]
    fn lincomb_matches_sum_of_muls() {
        let g = ProjectivePoint::GENERATOR;
        let h = g.double();
        let k = Scalar::from(0x1234_5678u64);
        let l = Scalar::from(0x9abc_def0u64);

        let reference = super::mul(&g, &k).add(&super::mul(&h, &l));
        assert_eq!(super::lincomb(&[(g, k), (h, l)]), reference);
    }
}
