//! Lookup tables. Building these at runtime needs `cos`, `log10`, and `powf` for every bin, so they are
//! generated once (offline, or with [crate::windows::Window] and [super::weighting_profile]) and only validated here.
use crate::errors::{MeterError, MeterResult};

/// A window and a weighting profile that were generated for one block length and sample rate.
#[derive(Debug, Clone, Copy)]
pub struct MeterTables<'a> {
    pub block_len: usize,
    pub sample_rate_hz: u32,
    /// `block_len` tapering coefficients
    pub window: &'a [f32],
    /// `block_len / 2` pre-squared, pre-combined power weights
    pub weighting: &'a [f32],
}

impl<'a> MeterTables<'a> {
    pub const fn new(
        block_len: usize,
        sample_rate_hz: u32,
        window: &'a [f32],
        weighting: &'a [f32],
    ) -> Self {
        Self {
            block_len,
            sample_rate_hz,
            window,
            weighting,
        }
    }

    /// the tables are only correct for the block length and sample rate they were generated for
    pub fn validate(&self, block_len: usize, sample_rate_hz: u32) -> MeterResult<()> {
        if self.block_len != block_len {
            return Err(MeterError::TableBlockLength {
                expected: block_len,
                actual: self.block_len,
            });
        }
        if self.sample_rate_hz != sample_rate_hz {
            return Err(MeterError::TableSampleRate {
                expected: sample_rate_hz,
                actual: self.sample_rate_hz,
            });
        }
        if self.window.len() != block_len {
            return Err(MeterError::WindowLength {
                expected: block_len,
                actual: self.window.len(),
            });
        }
        if self.weighting.len() != block_len / 2 {
            return Err(MeterError::WeightingLength {
                expected: block_len / 2,
                actual: self.weighting.len(),
            });
        }

        Ok(())
    }
}

/// multiply two pre-squared curves together at compile time
pub const fn combine_squared<const BINS: usize>(a: &[f32; BINS], b: &[f32; BINS]) -> [f32; BINS] {
    let mut out = [0.0; BINS];

    let mut i = 0;
    while i < BINS {
        out[i] = a[i] * b[i];
        i += 1;
    }

    out
}

/// Symmetric Hann window for 256 samples. `HanningWindow::<256>::windows()` rounded to 8 places.
pub const HANN_WINDOW_256: [f32; 256] = [
    0.00000000, 0.00015177, 0.00060700, 0.00136541, 0.00242654, 0.00378975, 0.00545420, 0.00741888,
    0.00968261, 0.01224402, 0.01510153, 0.01825343, 0.02169779, 0.02543253, 0.02945537, 0.03376389,
    0.03835545, 0.04322727, 0.04837640, 0.05379971, 0.05949390, 0.06545553, 0.07168096, 0.07816643,
    0.08490798, 0.09190154, 0.09914286, 0.10662753, 0.11435102, 0.12230863, 0.13049554, 0.13890677,
    0.14753723, 0.15638166, 0.16543470, 0.17469085, 0.18414450, 0.19378990, 0.20362120, 0.21363243,
    0.22381751, 0.23417027, 0.24468440, 0.25535354, 0.26617120, 0.27713082, 0.28822574, 0.29944923,
    0.31079447, 0.32225458, 0.33382260, 0.34549150, 0.35725421, 0.36910357, 0.38103240, 0.39303346,
    0.40509945, 0.41722306, 0.42939692, 0.44161365, 0.45386582, 0.46614600, 0.47844673, 0.49076055,
    0.50307997, 0.51539753, 0.52770574, 0.53999713, 0.55226423, 0.56449961, 0.57669583, 0.58884548,
    0.60094120, 0.61297564, 0.62494149, 0.63683150, 0.64863843, 0.66035512, 0.67197446, 0.68348940,
    0.69489294, 0.70617816, 0.71733821, 0.72836632, 0.73925578, 0.75000000, 0.76059244, 0.77102668,
    0.78129638, 0.79139530, 0.80131732, 0.81105641, 0.82060666, 0.82996227, 0.83911756, 0.84806697,
    0.85680508, 0.86532657, 0.87362627, 0.88169914, 0.88954029, 0.89714494, 0.90450850, 0.91162647,
    0.91849455, 0.92510857, 0.93146450, 0.93755849, 0.94338684, 0.94894602, 0.95423264, 0.95924349,
    0.96397554, 0.96842592, 0.97259191, 0.97647100, 0.98006082, 0.98335920, 0.98636414, 0.98907380,
    0.99148655, 0.99360092, 0.99541563, 0.99692957, 0.99814183, 0.99905166, 0.99965853, 0.99996206,
    0.99996206, 0.99965853, 0.99905166, 0.99814183, 0.99692957, 0.99541563, 0.99360092, 0.99148655,
    0.98907380, 0.98636414, 0.98335920, 0.98006082, 0.97647100, 0.97259191, 0.96842592, 0.96397554,
    0.95924349, 0.95423264, 0.94894602, 0.94338684, 0.93755849, 0.93146450, 0.92510857, 0.91849455,
    0.91162647, 0.90450850, 0.89714494, 0.88954029, 0.88169914, 0.87362627, 0.86532657, 0.85680508,
    0.84806697, 0.83911756, 0.82996227, 0.82060666, 0.81105641, 0.80131732, 0.79139530, 0.78129638,
    0.77102668, 0.76059244, 0.75000000, 0.73925578, 0.72836632, 0.71733821, 0.70617816, 0.69489294,
    0.68348940, 0.67197446, 0.66035512, 0.64863843, 0.63683150, 0.62494149, 0.61297564, 0.60094120,
    0.58884548, 0.57669583, 0.56449961, 0.55226423, 0.53999713, 0.52770574, 0.51539753, 0.50307997,
    0.49076055, 0.47844673, 0.46614600, 0.45386582, 0.44161365, 0.42939692, 0.41722306, 0.40509945,
    0.39303346, 0.38103240, 0.36910357, 0.35725421, 0.34549150, 0.33382260, 0.32225458, 0.31079447,
    0.29944923, 0.28822574, 0.27713082, 0.26617120, 0.25535354, 0.24468440, 0.23417027, 0.22381751,
    0.21363243, 0.20362120, 0.19378990, 0.18414450, 0.17469085, 0.16543470, 0.15638166, 0.14753723,
    0.13890677, 0.13049554, 0.12230863, 0.11435102, 0.10662753, 0.09914286, 0.09190154, 0.08490798,
    0.07816643, 0.07168096, 0.06545553, 0.05949390, 0.05379971, 0.04837640, 0.04322727, 0.03835545,
    0.03376389, 0.02945537, 0.02543253, 0.02169779, 0.01825343, 0.01510153, 0.01224402, 0.00968261,
    0.00741888, 0.00545420, 0.00378975, 0.00242654, 0.00136541, 0.00060700, 0.00015177, 0.00000000,
];

/// A-weighting for 128 bins at 16kHz (62.5 Hz per bin), already squared. `AWeighting::<128>::new(16_000)`
pub const A_WEIGHTING_SQUARED_256_16K: [f32; 128] = [
    0.0, 0.00231384, 0.02404555, 0.07053053, 0.13568045, 0.21329557, 0.29815036, 0.38596063,
    0.47339018, 0.55801311, 0.63820743, 0.71300727, 0.78194674, 0.84491782, 0.90205311, 0.95363557,
    1.00003259, 1.04165018, 1.07890252, 1.11219269, 1.14190137, 1.16838092, 1.19195295, 1.21290821,
    1.23150779, 1.24798506, 1.26254797, 1.27538154, 1.28665019, 1.29650000, 1.30506085, 1.31244823,
    1.31876502, 1.32410292, 1.32854385, 1.33216109, 1.33502032, 1.33718052, 1.33869477, 1.33961091,
    1.33997221, 1.33981785, 1.33918337, 1.33810114, 1.33660064, 1.33470883, 1.33245042, 1.32984807,
    1.32692264, 1.32369336, 1.32017802, 1.31639308, 1.31235384, 1.30807452, 1.30356839, 1.29884783,
    1.29392445, 1.28880912, 1.28351207, 1.27804294, 1.27241081, 1.26662426, 1.26069142, 1.25462001,
    1.24841734, 1.24209037, 1.23564575, 1.22908980, 1.22242857, 1.21566784, 1.20881315, 1.20186981,
    1.19484292, 1.18773736, 1.18055784, 1.17330891, 1.16599491, 1.15862006, 1.15118841, 1.14370388,
    1.13617026, 1.12859118, 1.12097020, 1.11331073, 1.10561606, 1.09788941, 1.09013388, 1.08235245,
    1.07454804, 1.06672347, 1.05888146, 1.05102466, 1.04315563, 1.03527685, 1.02739072, 1.01949959,
    1.01160571, 1.00371127, 0.99581840, 0.98792914, 0.98004549, 0.97216938, 0.96430267, 0.95644717,
    0.94860463, 0.94077674, 0.93296514, 0.92517141, 0.91739707, 0.90964360, 0.90191243, 0.89420493,
    0.88652243, 0.87886622, 0.87123751, 0.86363751, 0.85606735, 0.84852814, 0.84102093, 0.83354674,
    0.82610655, 0.81870128, 0.81133184, 0.80399908, 0.79670383, 0.78944688, 0.78222896, 0.77505080,
];

/// Frequency response correction for the reference MEMS microphone, 128 bins at 16kHz.
/// Already squared. These were measured, so there is no generator for them.
pub const MIC_CORRECTION_SQUARED_256_16K: [f32; 128] = [
    1.1834, 1.1220, 1.0965, 1.0715, 1.0471, 1.0233, 1.0000, 0.9886, 0.9772, 0.9772, 0.9772, 0.9886,
    0.9886, 0.9886, 1.0000, 1.0000, 1.0000, 1.0000, 0.9886, 0.9886, 0.9886, 0.9772, 0.9772, 0.9772,
    0.9661, 0.9661, 0.9550, 0.9550, 0.9441, 0.9441, 0.9333, 0.9333, 0.9226, 0.9226, 0.9120, 0.9120,
    0.9016, 0.9016, 0.8913, 0.8913, 0.8810, 0.8810, 0.8710, 0.8710, 0.8610, 0.8610, 0.8511, 0.8511,
    0.8414, 0.8414, 0.8318, 0.8318, 0.8222, 0.8222, 0.8128, 0.8128, 0.8035, 0.8035, 0.7943, 0.7943,
    0.7852, 0.7852, 0.7762, 0.7762, 0.7674, 0.7674, 0.7586, 0.7586, 0.7499, 0.7499, 0.7413, 0.7413,
    0.7328, 0.7328, 0.7244, 0.7244, 0.7161, 0.7161, 0.7079, 0.7079, 0.6998, 0.6998, 0.6918, 0.6918,
    0.6839, 0.6839, 0.6761, 0.6761, 0.6683, 0.6683, 0.6607, 0.6607, 0.6531, 0.6531, 0.6457, 0.6457,
    0.6383, 0.6383, 0.6310, 0.6310, 0.6237, 0.6237, 0.6166, 0.6166, 0.6095, 0.6095, 0.6026, 0.6026,
    0.5957, 0.5957, 0.5888, 0.5888, 0.5821, 0.5821, 0.5754, 0.5754, 0.5688, 0.5688, 0.5623, 0.5623,
    0.5559, 0.5559, 0.5495, 0.5495, 0.5433, 0.5433, 0.5370, 0.5370,
];

pub const WEIGHTING_PROFILE_256_16K: [f32; 128] =
    combine_squared(&A_WEIGHTING_SQUARED_256_16K, &MIC_CORRECTION_SQUARED_256_16K);

/// Everything the meter needs for 256 sample blocks at 16kHz.
pub const TABLES_256_16K: MeterTables<'static> =
    MeterTables::new(256, 16_000, &HANN_WINDOW_256, &WEIGHTING_PROFILE_256_16K);
