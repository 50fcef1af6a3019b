//! Stored magic multipliers, one per square, indexed a1 = 0.
//!
//! Each one hashes the square's relevant blockers into `popcount(mask)` bits
//! with no destructive collision, which the tests check square by square.
//! To replace a set, run `gen_magics [seed] [threads]` (the seed defaults to
//! [`DEFAULT_SEED`](crate::config::DEFAULT_SEED)) and paste its output here.

use crate::types::Slider;

#[rustfmt::skip]
pub const BISHOP_MAGICS: [u64; 64] = [
    0x0040011a02220020, 0x041010020141c020, 0x0010808091010110, 0x0009040900a44040,
    0x0025104010008100, 0x0800825041040882, 0x080a080904120000, 0x9000420084200200,
    0x4001980810008202, 0x021004504c004091, 0x01081000a2104400, 0x0004040400808900,
    0x8048120210803001, 0x5000050120120a00, 0x01004200902c3040, 0x0202248208120210,
    0x04c020920c580082, 0x182000020c040084, 0x0008009002801011, 0x0008221404001348,
    0x5804008e10220603, 0x0204082602010400, 0x0401820108011004, 0x000884050401010f,
    0x00202000080b4420, 0x0028040402100202, 0x0401100081004202, 0x0081180009004100,
    0x0448104008044000, 0x420800800a416002, 0x0400860021a23002, 0x0020a4a321040201,
    0x450918224188a000, 0x81a8080c00080988, 0x0007104810040800, 0x1801400a00022200,
    0x1080c40400804100, 0x0002014100020080, 0x0201880200a10116, 0x2408084140050103,
    0x0501100210002288, 0x4241844402022001, 0x009200202800d420, 0x811c110141040801,
    0x5000603600800410, 0x1020600042810441, 0x00181001020040c0, 0x0030020043190840,
    0x0045093002200094, 0x4222021084050425, 0x802002484c100100, 0x0000141020a80900,
    0x2010104002820410, 0x0404400801010185, 0x00c0500a04d10002, 0x0125280801082082,
    0x0005010450048400, 0x1110120082088202, 0x4212100544040400, 0x4007010011048800,
    0x0c20980014208210, 0x0002004902880200, 0x0004102001040092, 0x5620020200440988,
];
#[rustfmt::skip]
pub const ROOK_MAGICS: [u64; 64] = [
    0x6100108000210041, 0x0040100020004004, 0x1100200100084010, 0x2280100208008480,
    0x0900041002080100, 0x0200011024086200, 0x0880108029000200, 0x2280044039000080,
    0x821280008020c000, 0x90820049018200a0, 0x0001802008100180, 0x0000800800801000,
    0x004100106c480100, 0x00808064002e0080, 0x0801000453000200, 0x3049000040810002,
    0x4002020028804100, 0x90400100410880a0, 0x812c1200228200c0, 0x0002220040100a00,
    0x0042020010040820, 0x8085010044000802, 0x0000240008011082, 0x0089020004088761,
    0x0000401480002080, 0x80400800a0007000, 0x4041100080200082, 0x20c1002100100008,
    0x0000080100100500, 0x0a00040080020080, 0x0201000100840200, 0x0401408a00040441,
    0x0480004001402000, 0x1041008225004008, 0x1808a001010010c4, 0x04e2092042001200,
    0x1880800800800400, 0x8050820080804400, 0x80f0800300800200, 0x1850104102000094,
    0x5300c00080018020, 0x0010004020104000, 0x0926c200a0820014, 0x0400080010008080,
    0x0010080004008080, 0x08820009b0020004, 0x000490080a0c0005, 0x1204008100420004,
    0x0802304000800180, 0x90010184402a0600, 0x0908408204502200, 0x0050880080100080,
    0x0020140080080180, 0x0010800200140080, 0x0014021089080400, 0x0000006481040600,
    0x5080042100104083, 0x8204248100400019, 0x8100102004090041, 0x0081010420100009,
    0x0002011020040802, 0x022a006408502102, 0x0808102e04884104, 0x0000008020440102,
];

/// Stored multipliers for `slider`, indexed by square.
#[inline]
#[must_use]
pub const fn magics(slider: Slider) -> &'static [u64; 64] {
    match slider {
        Slider::Rook => &ROOK_MAGICS,
        Slider::Bishop => &BISHOP_MAGICS,
    }
}
