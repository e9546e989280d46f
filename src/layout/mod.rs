//! Layout facts of the V4L2 structures the facade marshals by hand.
//!
//! Every value here is computed by the compiler: the structures come from
//! bindgen's reading of the real header and the offsets from `offset_of!`,
//! both evaluated for the target this crate is built for.

mod bindings;

use std::ffi::c_void;
use std::mem::{offset_of, size_of};

use bindings::*;

/// Byte offset of one field inside a videodev2 structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetFact {
    /// Constant name in the generated file (`offset_<label>`)
    pub name: &'static str,
    /// C structure name
    pub structure: &'static str,
    /// C field name
    pub field: &'static str,
    /// Byte offset from the start of the structure
    pub offset: u64,
}

macro_rules! offset_facts {
    ($($label:literal => $ty:ident . $member:ident as $field:literal,)*) => {
        &[$(
            OffsetFact {
                name: concat!("offset_", $label),
                structure: stringify!($ty),
                field: $field,
                offset: offset_of!($ty, $member) as u64,
            },
        )*]
    };
}

/// Offsets published to the facade, in emission order.
///
/// The names and their count are shared with the facade package and only
/// change together with it.
pub const OFFSET_FACTS: &[OffsetFact] = offset_facts! {
    "format_type"                => v4l2_format.type_ as "type",
    "streamparm_type"            => v4l2_streamparm.type_ as "type",
    "requestbuffers_type"        => v4l2_requestbuffers.type_ as "type",
    "buffer_type"                => v4l2_buffer.type_ as "type",
    "cropcap_type"               => v4l2_cropcap.type_ as "type",
    "crop_type"                  => v4l2_crop.type_ as "type",
    "fmtdesc_type"               => v4l2_fmtdesc.type_ as "type",
    "frmsizeenum_type"           => v4l2_frmsizeenum.type_ as "type",
    "frmivalenum_type"           => v4l2_frmivalenum.type_ as "type",
    "queryctrl_type"             => v4l2_queryctrl.type_ as "type",
    "event_subscription_type"    => v4l2_event_subscription.type_ as "type",
    "event_type"                 => v4l2_event.type_ as "type",
    // `name` lives in an anonymous union; union members share its offset.
    "querymenu_union"            => v4l2_querymenu.__bindgen_anon_1 as "name",
    "input_type"                 => v4l2_input.type_ as "type",
    "output_type"                => v4l2_output.type_ as "type",
    "selection_type"             => v4l2_selection.type_ as "type",
    "timecode_type"              => v4l2_timecode.type_ as "type",
    "pix_format_encoding"        => v4l2_pix_format.__bindgen_anon_1 as "ycbcr_enc",
    "pix_format_mplane_encoding" => v4l2_pix_format_mplane.__bindgen_anon_1 as "ycbcr_enc",
};

/// Size of a machine address on the target, in bytes.
pub const POINTER_WIDTH: u64 = size_of::<*const c_void>() as u64;

/// Everything the generated file publishes about the target's layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutFacts {
    pub pointer_width: u64,
    pub offsets: Vec<OffsetFact>,
}

impl LayoutFacts {
    /// Facts for the target this generator was compiled for.
    pub fn probe() -> Self {
        Self {
            pointer_width: POINTER_WIDTH,
            offsets: OFFSET_FACTS.to_vec(),
        }
    }

    /// Look up an offset by its constant name.
    pub fn offset(&self, name: &str) -> Option<u64> {
        self.offsets
            .iter()
            .find(|fact| fact.name == name)
            .map(|fact| fact.offset)
    }
}
