//! RGB spaces: linear-light variants hang off XYZ, gamma-encoded variants
//! hang off their linear variant through a transfer function. All of them
//! are bounded to `[0, 1]` per channel.
//!
//! sRGB runs entirely on `palette`. Display P3, Rec. 2020, Adobe 98 and
//! ProPhoto have no `palette` type, so their CSS primaries and transfer
//! curves live here; their matrices are balanced against `palette`'s white
//! points so white stays white across the whole table.

use palette::convert::FromColorUnclamped;
use palette::{LinSrgb, Srgb};

use crate::math::{Mat3, mul, spow};
use crate::space::{ColorSpace, CoordDescriptor, CoordSyntax, Format, Gamut, WhitePoint};

use super::xyz::{XYZ_D50, XYZ_D65, XyzD65};

const RGB_COORDS: [CoordDescriptor; 3] = [
    CoordDescriptor::bounded("r", "Red", [0.0, 1.0]),
    CoordDescriptor::bounded("g", "Green", [0.0, 1.0]),
    CoordDescriptor::bounded("b", "Blue", [0.0, 1.0]),
];

static COLOR_ONLY: &[Format] = &[Format::COLOR];

static SRGB_FORMATS: &[Format] = &[
    Format::function("rgb", [CoordSyntax::Byte; 3], false),
    Format::function("rgba", [CoordSyntax::Byte; 3], true),
    Format::HEX,
    Format::KEYWORD,
    Format::COLOR,
];

/// Linear-light primaries given as a CSS matrix pair.
struct Primaries {
    forward: Mat3,
    inverse: Mat3,
    white: WhitePoint,
}

impl Primaries {
    /// Per-row factor that sends RGB white onto the `palette` white point.
    fn balance(&self) -> [f64; 3] {
        let white = self.white.xyz();
        std::array::from_fn(|i| white[i] / self.forward[i].iter().sum::<f64>())
    }

    fn to_xyz(&self, rgb: [f64; 3]) -> [f64; 3] {
        let balance = self.balance();
        let xyz = mul(&self.forward, rgb);
        std::array::from_fn(|i| xyz[i] * balance[i])
    }

    fn from_xyz(&self, xyz: [f64; 3]) -> [f64; 3] {
        let balance = self.balance();
        mul(&self.inverse, std::array::from_fn(|i| xyz[i] / balance[i]))
    }
}

// ── sRGB ────────────────────────────────────────────────────────────────

fn linear_srgb_to_xyz([r, g, b]: [f64; 3]) -> [f64; 3] {
    let xyz = XyzD65::from_color_unclamped(LinSrgb::<f64>::new(r, g, b));
    [xyz.x, xyz.y, xyz.z]
}

fn xyz_to_linear_srgb([x, y, z]: [f64; 3]) -> [f64; 3] {
    let rgb = LinSrgb::<f64>::from_color_unclamped(XyzD65::new(x, y, z));
    [rgb.red, rgb.green, rgb.blue]
}

/// sRGB electro-optical transfer (encoded to linear).
pub(crate) fn srgb_decode([r, g, b]: [f64; 3]) -> [f64; 3] {
    let linear: LinSrgb<f64> = Srgb::<f64>::new(r, g, b).into_linear();
    [linear.red, linear.green, linear.blue]
}

/// Inverse sRGB transfer (linear to encoded).
pub(crate) fn srgb_encode([r, g, b]: [f64; 3]) -> [f64; 3] {
    let encoded = Srgb::<f64>::from_linear(LinSrgb::<f64>::new(r, g, b));
    [encoded.red, encoded.green, encoded.blue]
}

/// Linear-light sRGB.
pub static SRGB_LINEAR: ColorSpace = ColorSpace {
    id: "srgb-linear",
    name: "Linear sRGB",
    coords: RGB_COORDS,
    base: Some(&XYZ_D65),
    to_base: linear_srgb_to_xyz,
    from_base: xyz_to_linear_srgb,
    white: WhitePoint::D65,
    gamut: Gamut::Bounded,
    formats: COLOR_ONLY,
    css_id: "srgb-linear",
    css_native: true,
};

/// Gamma-encoded sRGB.
pub static SRGB: ColorSpace = ColorSpace {
    id: "srgb",
    name: "sRGB",
    coords: RGB_COORDS,
    base: Some(&SRGB_LINEAR),
    to_base: srgb_decode,
    from_base: srgb_encode,
    white: WhitePoint::D65,
    gamut: Gamut::Bounded,
    formats: SRGB_FORMATS,
    css_id: "srgb",
    css_native: true,
};

// ── Display P3 ──────────────────────────────────────────────────────────

const P3_TO_XYZ: Mat3 = [
    [0.486_570_948_648_216_2, 0.265_667_693_169_093_06, 0.198_217_285_234_362_5],
    [0.228_974_564_069_748_8, 0.691_738_521_836_506_4, 0.079_286_914_093_745],
    [0.0, 0.045_113_381_858_902_64, 1.043_944_368_900_976],
];

const XYZ_TO_P3: Mat3 = [
    [2.493_496_911_941_425, -0.931_383_617_919_123_9, -0.402_710_784_450_716_84],
    [-0.829_488_969_561_574_7, 1.762_664_060_318_346_3, 0.023_624_685_841_943_577],
    [0.035_845_830_243_784_47, -0.076_172_389_268_041_82, 0.956_884_524_007_687_2],
];

const P3_PRIMARIES: Primaries = Primaries {
    forward: P3_TO_XYZ,
    inverse: XYZ_TO_P3,
    white: WhitePoint::D65,
};

/// Linear-light Display P3.
pub static P3_LINEAR: ColorSpace = ColorSpace {
    id: "p3-linear",
    name: "Linear P3",
    coords: RGB_COORDS,
    base: Some(&XYZ_D65),
    to_base: |rgb| P3_PRIMARIES.to_xyz(rgb),
    from_base: |xyz| P3_PRIMARIES.from_xyz(xyz),
    white: WhitePoint::D65,
    gamut: Gamut::Bounded,
    formats: COLOR_ONLY,
    css_id: "--display-p3-linear",
    css_native: false,
};

/// Display P3 (sRGB transfer curve).
pub static P3: ColorSpace = ColorSpace {
    id: "p3",
    name: "P3",
    coords: RGB_COORDS,
    base: Some(&P3_LINEAR),
    to_base: srgb_decode,
    from_base: srgb_encode,
    white: WhitePoint::D65,
    gamut: Gamut::Bounded,
    formats: COLOR_ONLY,
    css_id: "display-p3",
    css_native: true,
};

// ── Rec. 2020 ───────────────────────────────────────────────────────────

const REC2020_TO_XYZ: Mat3 = [
    [0.636_958_048_301_291_4, 0.144_616_903_586_208_32, 0.168_880_975_164_172_1],
    [0.262_700_212_011_267_1, 0.677_998_071_518_870_8, 0.059_301_716_469_861_96],
    [0.0, 0.028_072_693_049_087_428, 1.060_985_057_710_791],
];

const XYZ_TO_REC2020: Mat3 = [
    [1.716_651_187_971_268, -0.355_670_783_776_392, -0.253_366_281_373_66],
    [-0.666_684_351_832_489, 1.616_481_236_634_939, 0.015_768_545_813_911_1],
    [0.017_639_857_445_311, -0.042_770_613_257_809, 0.942_103_121_235_474],
];

const REC2020_PRIMARIES: Primaries = Primaries {
    forward: REC2020_TO_XYZ,
    inverse: XYZ_TO_REC2020,
    white: WhitePoint::D65,
};

const REC2020_ALPHA: f64 = 1.099_296_826_809_44;
const REC2020_BETA: f64 = 0.018_053_968_510_807;

fn rec2020_decode(v: f64) -> f64 {
    let abs = v.abs();
    if abs < REC2020_BETA * 4.5 {
        v / 4.5
    } else {
        v.signum() * ((abs + REC2020_ALPHA - 1.0) / REC2020_ALPHA).powf(1.0 / 0.45)
    }
}

fn rec2020_encode(v: f64) -> f64 {
    let abs = v.abs();
    if abs >= REC2020_BETA {
        v.signum() * (REC2020_ALPHA * abs.powf(0.45) - (REC2020_ALPHA - 1.0))
    } else {
        4.5 * v
    }
}

/// Linear-light Rec. 2020.
pub static REC2020_LINEAR: ColorSpace = ColorSpace {
    id: "rec2020-linear",
    name: "Linear REC.2020",
    coords: RGB_COORDS,
    base: Some(&XYZ_D65),
    to_base: |rgb| REC2020_PRIMARIES.to_xyz(rgb),
    from_base: |xyz| REC2020_PRIMARIES.from_xyz(xyz),
    white: WhitePoint::D65,
    gamut: Gamut::Bounded,
    formats: COLOR_ONLY,
    css_id: "--rec2020-linear",
    css_native: false,
};

/// Rec. 2020 (ITU-R BT.2020 transfer).
pub static REC2020: ColorSpace = ColorSpace {
    id: "rec2020",
    name: "REC.2020",
    coords: RGB_COORDS,
    base: Some(&REC2020_LINEAR),
    to_base: |rgb| rgb.map(rec2020_decode),
    from_base: |rgb| rgb.map(rec2020_encode),
    white: WhitePoint::D65,
    gamut: Gamut::Bounded,
    formats: COLOR_ONLY,
    css_id: "rec2020",
    css_native: true,
};

// ── Adobe 98 RGB ────────────────────────────────────────────────────────

const A98_TO_XYZ: Mat3 = [
    [0.576_669_042_910_130_5, 0.185_558_237_906_546_3, 0.188_228_646_234_994_7],
    [0.297_344_975_250_536_05, 0.627_363_566_255_466_1, 0.075_291_458_493_997_88],
    [0.027_031_361_386_412_34, 0.070_688_852_535_827_23, 0.991_337_536_837_638_8],
];

const XYZ_TO_A98: Mat3 = [
    [2.041_587_903_810_746_5, -0.565_006_974_278_859_6, -0.344_731_350_778_329_56],
    [-0.969_243_636_280_879_5, 1.875_967_501_507_720_2, 0.041_555_057_407_175_57],
    [0.013_444_280_632_031_142, -0.118_362_392_231_018_38, 1.015_174_994_391_205_4],
];

const A98_PRIMARIES: Primaries = Primaries {
    forward: A98_TO_XYZ,
    inverse: XYZ_TO_A98,
    white: WhitePoint::D65,
};

const A98_GAMMA: f64 = 563.0 / 256.0;

/// Linear-light Adobe 98 RGB.
pub static A98RGB_LINEAR: ColorSpace = ColorSpace {
    id: "a98rgb-linear",
    name: "Linear Adobe® 98 RGB compatible",
    coords: RGB_COORDS,
    base: Some(&XYZ_D65),
    to_base: |rgb| A98_PRIMARIES.to_xyz(rgb),
    from_base: |xyz| A98_PRIMARIES.from_xyz(xyz),
    white: WhitePoint::D65,
    gamut: Gamut::Bounded,
    formats: COLOR_ONLY,
    css_id: "--a98-rgb-linear",
    css_native: false,
};

/// Adobe 98 RGB (pure gamma 563/256).
pub static A98RGB: ColorSpace = ColorSpace {
    id: "a98rgb",
    name: "Adobe® 98 RGB compatible",
    coords: RGB_COORDS,
    base: Some(&A98RGB_LINEAR),
    to_base: |rgb| rgb.map(|v| spow(v, A98_GAMMA)),
    from_base: |rgb| rgb.map(|v| spow(v, 1.0 / A98_GAMMA)),
    white: WhitePoint::D65,
    gamut: Gamut::Bounded,
    formats: COLOR_ONLY,
    css_id: "a98-rgb",
    css_native: true,
};

// ── ProPhoto RGB (D50) ──────────────────────────────────────────────────

const PROPHOTO_TO_XYZ_D50: Mat3 = [
    [0.797_766_644_900_642_3, 0.135_181_297_400_533_08, 0.031_347_734_128_392_2],
    [0.288_074_828_819_401_3, 0.711_835_234_241_873, 0.000_089_936_938_725_64],
    [0.0, 0.0, 0.825_104_602_510_460_2],
];

const XYZ_D50_TO_PROPHOTO: Mat3 = [
    [1.345_786_881_647_158_3, -0.255_572_087_379_794_64, -0.051_101_864_975_545_26],
    [-0.544_630_705_124_901_9, 1.508_247_742_845_146_8, 0.020_527_447_436_421_39],
    [0.0, 0.0, 1.211_967_545_638_945_2],
];

const PROPHOTO_PRIMARIES: Primaries = Primaries {
    forward: PROPHOTO_TO_XYZ_D50,
    inverse: XYZ_D50_TO_PROPHOTO,
    white: WhitePoint::D50,
};

const PROPHOTO_ET: f64 = 1.0 / 512.0;
const PROPHOTO_ET2: f64 = 16.0 / 512.0;

fn prophoto_decode(v: f64) -> f64 {
    if v.abs() <= PROPHOTO_ET2 {
        v / 16.0
    } else {
        spow(v, 1.8)
    }
}

fn prophoto_encode(v: f64) -> f64 {
    if v.abs() >= PROPHOTO_ET {
        spow(v, 1.0 / 1.8)
    } else {
        16.0 * v
    }
}

/// Linear-light ProPhoto RGB.
pub static PROPHOTO_LINEAR: ColorSpace = ColorSpace {
    id: "prophoto-linear",
    name: "Linear ProPhoto",
    coords: RGB_COORDS,
    base: Some(&XYZ_D50),
    to_base: |rgb| PROPHOTO_PRIMARIES.to_xyz(rgb),
    from_base: |xyz| PROPHOTO_PRIMARIES.from_xyz(xyz),
    white: WhitePoint::D50,
    gamut: Gamut::Bounded,
    formats: COLOR_ONLY,
    css_id: "--prophoto-rgb-linear",
    css_native: false,
};

/// ProPhoto RGB (gamma 1.8 with linear toe).
pub static PROPHOTO: ColorSpace = ColorSpace {
    id: "prophoto",
    name: "ProPhoto",
    coords: RGB_COORDS,
    base: Some(&PROPHOTO_LINEAR),
    to_base: |rgb| rgb.map(prophoto_decode),
    from_base: |rgb| rgb.map(prophoto_encode),
    white: WhitePoint::D50,
    gamut: Gamut::Bounded,
    formats: COLOR_ONLY,
    css_id: "prophoto-rgb",
    css_native: true,
};
