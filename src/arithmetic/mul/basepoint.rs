//! Precomputed multiples of the SM2 base point, in the Montgomery domain.
//!
//! Row `j` stores the 64 points `(k + 1) * 2^(7 * j) * G` for `k` in `0..64`,
//! flattened into eight limb planes of 64 words each (the four X limbs
//! followed by the four Y limbs) so a gather touches every entry of the row.
//! Generated offline from the curve parameters; regenerate with
//! `GeneratorTables::new(&AffinePoint::GENERATOR)` if the layout changes.

pub(super) const GENERATOR_TABLE: [[u64; 512]; 37] = [
    [
        0x61328990f418029e, 0x0af037bfbc3be46a, 0x1cda54fdab589e4a, 0x393f7c5a98615060,
        0x9a5756336a9c8162, 0x136a9c4c0acd72ba, 0xaa3531c781f06784, 0xde523a1c09122670,
        0x98e795c330fbde86, 0x6774298a642cb143, 0x2b252ad03421e115, 0x18a65d8df3afdd62,
        0x34e51c6a8000fe4e, 0xa0e9a43922542fc3, 0xf3489343dde97d4d, 0xf71560c939e8a120,
        0x3c126193cfbdfeff, 0x639f92bc1497fe38, 0xbefd338086712116, 0x70d5bda271099001,
        0x83879486a0551c80, 0xc09545a9b3c50898, 0x125cbed22eba7f39, 0x9ed156eca215fda2,
        0xc5957d29e7492326, 0x136d8342afe945b5, 0x32861816d37c24cc, 0xf1496afd4d7e922a,
        0xdc64c4b054f1f257, 0xdcaa3790bd64cd96, 0x7b179a8bb889c78a, 0xa6c11369adbb3c8b,
        0xf011b5e53dba2c0e, 0x7d4c140c2351a2a9, 0x60494a8333733cbc, 0xfb73d16f59eb1a9b,
        0x2c086d5e7da90fc9, 0x5e931b21c55d5720, 0x45191390039d646d, 0x2faa7c4dc81bc828,
        0x178ca01b8b2c703c, 0x7203d5423c030643, 0x11aaa417e2147129, 0x49c2769b63d4523d,
        0xb5c1f5d3bfba043b, 0xe5dacbae97a60de7, 0xf663899712118abd, 0xfa8ff511b36362ec,
        0x123d9ca2a294d7ea, 0x4559b0a29eaca504, 0x8e8b28e32040178e, 0x838b356ed23f620d,
        0xf3b1701f32866e57, 0xd9c1a140d396bdce, 0x36c84e34520d216d, 0x25d249d57380931e,
        0x305183eb00973d66, 0xb86b6d82e154bc00, 0x1d92c36c7c1f5d3b, 0xd6171111e4b8c48e,
        0x2f302d589c341f84, 0xa2315af3c2bccb7a, 0xd5f6110a865c665a, 0x80ffa5ae0d038ad4,
        0x3e7981eddca6c050, 0x83bdc9ba2d8fa938, 0x26765289db4f0a0d, 0x487ea27fe9016209,
        0x15aa58f221dfcc53, 0xb1274a255e7ec73c, 0x0b89419307132520, 0x90be6f2a22cc810c,
        0x8e5e0495ab21af8f, 0xecdb60d82d110e71, 0x7557c8c7c6affc01, 0x89f38500d6d7e4e4,
        0x7da2bdfd89c46941, 0x3f194a6cddac78dc, 0x9c14e38abbb2ce1f, 0x7121d6b87273b59a,
        0x4a31dd204996d845, 0x8ed8eeacd58bd278, 0x9b9e9707884efe46, 0x3d876d4a15fae7dd,
        0x1611dea0658e61be, 0xbd4433616c05d902, 0xc7c42e766c488d44, 0x19de7a9120c5ddb6,
        0x3addc3df0663f829, 0x91707e7de9d239c7, 0x5bb54ee2e427975a, 0x67f42a3fe11fa533,
        0xecb033c8b01196dc, 0xbc8ac152cee698d3, 0x069a7ab90aca32c5, 0xd78af40b4c8ec378,
        0xa6c68448026d4f11, 0x575c1e1bbf4c9823, 0x8da622a027ed8157, 0x3ee8cc1f8511e541,
        0x458e5ffd5cc27782, 0xb628ccb2a0e40b19, 0x983b7a2eb12ba339, 0xb16ed9d7fb62561f,
        0x605bba530ab71a51, 0x7112bb3d5e631461, 0x3ccef5c2f88a0a30, 0xf8df2cbaf0399eaf,
        0xaff4f896e975f03b, 0x9774834c4401b0ad, 0x2ba6e754097da3a7, 0x11c5a9f634085959,
        0x8699063b4492569b, 0xb9843a4b2617bc9b, 0xceff8f3e971725fc, 0x2e8fa8ac4592fe4b,
        0xf076847359de0f2e, 0x4215b78b6fb2800f, 0x2b2ef6b5c666171c, 0x87f03fad2011a45b,
        0x1ce6676095baf07c, 0x5a0b19e8895483e5, 0x1e60b19be11df757, 0x3ee227a1de557cca,
        0x264911a784f130ba, 0x95ddd3ee8672c98a, 0xddc3afe130c08b4c, 0xf44d3df336256c8f,
        0xd6a1ed99ac24c3c3, 0x5349d94b5788cd24, 0x0a265a308ceb4a0a, 0x8a86bcb4a09f9020,
        0x7ad354bf1ef5f4c5, 0xf15a876e5de34db6, 0x84ee5b69acfe18c5, 0x086e63414387df9e,
        0x3925bf83b48669b4, 0xe810b11b1388728e, 0xd90c19fd8a509267, 0x65708c6a9d8d4f07,
        0x667ba91de1bc2b2e, 0xa75ae72d6f74d053, 0x25866911cfddf221, 0x649535ce8ef4639d,
        0x48a76ba019f2b658, 0xcf5d7ce6b417bfe4, 0x611a1eec8c9e513f, 0xaba0500f7b69c20e,
        0x1fe95c821b935068, 0xed71f70c2c6bcc8c, 0xdb8991f9676915c4, 0xc1ed949d0668c65d,
        0x8faa3169728cfdc1, 0xeda23dc5fb2e80de, 0x6da013d232f943a9, 0x9f903e5b977956cd,
        0x54e65f4d8202d5bd, 0xde7192f7a1143c45, 0xe4e5215e591b9a36, 0xffb3a80d03f0a982,
        0x11596db3c3f206fb, 0x8f11c2ca31068df9, 0x0022b1540471ad90, 0x20d72d591590c321,
        0xc3f48611b9268939, 0x42044ffe000651a5, 0xdfd30d3e5923e7d6, 0x4c9da27049c2fa93,
        0x2140948e3db948d5, 0x2604eac72bc3da9c, 0x78d5207a90283f97, 0x5ae94c6922a2a74d,
        0xea1f39bdae2cbb01, 0x7683bb008a9113f9, 0x1df820850fdf9985, 0x272b86f29770c62b,
        0x6a50eae9a8dd86c3, 0x5b28d4ee1b641003, 0x4a97b6fafcee2cc1, 0x1396e1b33af5b1d8,
        0xe55d7aedab57962d, 0x8939109f2f76b0df, 0x9469b91f2ce29d37, 0x89df0324efde1ca3,
        0x74c9d97174822e13, 0xb15f6c05a0ff1e44, 0x20261501e37e36f6, 0x2bebc09a3cb59841,
        0x30bed4083ee64343, 0xa90326455f48f607, 0x4df3d04aefec26fc, 0x0a3077c8bc978dce,
        0x91167a5ee1c13b05, 0x0d7e9c18caa5736a, 0x3019fd6bfe887c64, 0x50dc8e3ac899dbe1,
        0x0f443ef363f875b9, 0x85e74ca08cba8047, 0xbbf492e0d9fbec28, 0x115c2fc0d9c44134,
        0x77d88740469522c8, 0x2e8237d8d8603a8a, 0x483da168e0d871c8, 0xb90ea13cd0bdc7f4,
        0x3c80c9d010a73e5c, 0x0f8babeb097c6617, 0x0df89411460efef1, 0xcd01076e14cc6d58,
        0xbe3301428890a8bc, 0xf617c54e44400c59, 0xe2d8e3f53b6dbcec, 0xa8e3e0949834adf2,
        0x8f01e0195b229223, 0x8dbc0b88bdf8e908, 0xdf6ae5949183839f, 0x96683044d0826f6a,
        0xde53aa7c6b975134, 0x892bed73ff614966, 0x0746a77a9bc202e5, 0x37671e241eb49608,
        0x63afcc932b2fd451, 0xf7c9d826f5fb9ea0, 0x7802fb3e3bd54630, 0x550e3e71a83be50a,
        0xc91c76dc29414a3c, 0xe3c17aa005e6def0, 0x3bd0a4c5d3568003, 0x62eab5663bd075d4,
        0x39fed873de4b9110, 0x2130b4de076544e7, 0xae3590f0ba9d206a, 0x3b014c73b311d90d,
        0xc45b26895fb6b8c1, 0x2e4964e732d2541b, 0xba1261e9d25226b6, 0xd08f8d45efd1e193,
        0x4cc1c4cba62915ff, 0xc6fe7e8b42b2ba67, 0xbf73502a546c864a, 0xf06262257c7e8827,
        0x3d757d1012c06c38, 0x3e9af8e14ced538a, 0x775df6a9bac85b56, 0x9c0c2ef3cbf50fb0,
        0x450049852b60cabb, 0x0f2508972adb40a8, 0x3ecd84e7c15f20aa, 0x52ae43cd9a9b4330,
        0x2ccd7fbb76b5e6ef, 0x2938b88afdd8615d, 0xb68a9aaa29bc86e3, 0x2f8047fe99bf6205,
        0xd7d6e92d5dc5868a, 0x76861e62c5273603, 0xf229bddfb035af5d, 0xf3d9b4b0745b8317,
        0xc1354e593c2d0ddd, 0x6a7e1a1d69db9ac1, 0x0a10fbe94b2fc190, 0xfc099043fd619998,
        0x2e81d68fd3450133, 0x08454cddb469eb37, 0x313a35c1e5f6186d, 0x9334430d8799302a,
        0x8fbf8b5b987b04ce, 0x673968fc50aeeae1, 0x72d6f9b3c10729bf, 0x589858558c3e2b32,
        0x4fadebbec7f5c64d, 0x1d12bc5c4303c247, 0xf713f30e73ae8326, 0x2705729a96e74f8a,
        0x287b34e1308aa041, 0xde6356357d8dc939, 0x7cedab1c4f8964e4, 0x69db851b980b21b9,
        0x23017e057e93c389, 0x56eb5b984fcbcd9a, 0x4f69c304c79f8bd1, 0x1e6325e01adaa8ff,
        0xf481759befddc764, 0x2ded2367838dc12d, 0x6db07a84cd1def5b, 0x967950a021fb2047,
        0x1e929a3930640fb7, 0x54aea92ec9468f50, 0x9a479313233c6eeb, 0x845c0fb2418ee45b,
        0x1839b9d1b94ddc7c, 0xe6281c70501c8630, 0xdc8e2d03d932df23, 0xac07a7c7fae123ab,
        0x16ef8f78fda698cc, 0x384285943677c70f, 0x7d58d334b6d5e62a, 0xd29c5d65f5443332,
        0x421f66def17b47bd, 0x940faf46e8b6482a, 0xbfc79248d1e7a01c, 0x64341fc4c681f376,
        0x5eb4afa389e943b8, 0xc0c0564d54e760c8, 0xdfde9323c02d9ce0, 0x929168bfea1e13eb,
        0x5a92c2c03e41e556, 0x3790fe897bdf7dc2, 0x32e5cbe6d28a21cc, 0xd9efb6c9836e93e9,
        0x8d539d6ed5498888, 0x4db0007c3a86e009, 0xf1090635292edd2c, 0xfe48bc64a1867c1b,
        0x51688b49a3e1ca18, 0x81800a05971615c3, 0xfba81eaaf61d23ca, 0xb78b243e4c43845f,
        0x9207456880adb3fb, 0x71aaa35f88817217, 0x364913cfd191b439, 0x8bbf4484b6b1852c,
        0xc1f5e5788d3295fa, 0xccbd8d37c4a8e82b, 0xf40aa52b87cbce60, 0x1de135ea7c7383bd,
        0xb30f4bbde3607d18, 0x8fbf6d1fc99754f8, 0x0e449a2e757a01b8, 0x693b3500e27b7ea4,
        0x63c563a83aff4428, 0x08c65d196746a3f4, 0x5dd8402115b7061e, 0xfa48d5c5bcfad3a1,
        0xaef09eb43ea35052, 0xfe0c027abd1e246c, 0xd9be66a8cdd274a1, 0xb07e32305533037e,
        0xcbf5da24813adf29, 0x2e6a3a75241baaff, 0xee12d062f4e139f8, 0x274c1de2788c2a30,
        0xce4ac99d9840dd64, 0xafb6fedc08114397, 0x638cb070aa1662fa, 0xbc53bc2407ac392a,
        0xd605474b09edaff3, 0x73fd298cb002bd9c, 0x9421fe7f861d9f9b, 0x141f96fb35da3c6b,
        0xdc91387e5b361718, 0x340f4459cc427ed4, 0x18c612ad4e1cbabc, 0x5297cf430791b964,
        0xdfb20ce756ae8610, 0xad240917c88a412e, 0x859ed9407a1f5159, 0x83b89abf1f10af6e,
        0xb028dc21a973bb50, 0xfdcdb038f8945d86, 0xb15b05447e402b12, 0xb6457d54eebdb7c2,
        0x57627a5a2e9b3ee5, 0x8f772fcb24d27c9e, 0x373f1cd5941ab2bd, 0x3a8e25c8ec918711,
        0x8c4d27e5154e565a, 0xf7b05401118606c2, 0x580491e2e4dd0e7d, 0xdb892971ce59b0f5,
        0xa64595eb6330c21a, 0xc7c74941c32549ee, 0xe8b86adaae2b82db, 0xe6eb58700899163f,
        0x176ce1a0a5e0ff6a, 0x6ef0ad95f968a635, 0x6d4393627c3447f6, 0xdd874f669866920e,
        0x1beb5bbba603f2f1, 0x6be6d56bc03d2039, 0x63440834d5adaa18, 0x484ac18346d3b5e0,
        0x005ab33ca133123e, 0x57e95b6c2892afac, 0xf41b8f6d5a7fa8a4, 0x0cd02ed40e78ff07,
        0x8d4cfb066e2a48f8, 0xc7b145169b7157ac, 0xcc496bfa6dc13c97, 0x4d0bd55632cf70ed,
        0xb1826a4c362258ef, 0x1060e7f8ec30e984, 0x96c9b9922bd99baf, 0xcbe1136f9a8f3382,
        0x5dc1116553a6e969, 0x7a61a6b5d7dd7165, 0x9bfea2db9f2c587d, 0x5c3544e762385ffa,
        0x167ee11b26ec55f9, 0xe9ca1a99b69b55ad, 0xdf915ae236885947, 0x0846dcc1663c5c62,
        0xcdfc5a58cdcdc439, 0x02f324e5e07e8e97, 0x8e63c9c09a9af4f3, 0x5caa5336d47d153d,
        0xddc9b9001de86399, 0x0500ce5bb35f7927, 0xc7f68c72ba6f2599, 0x2c342db5d9f06e44,
        0xc7df1eb9653d48c9, 0xc548b4262c4629df, 0x71767292692181fb, 0xe07c3c40d27bba59,
        0x10aadecbf8f0bbe8, 0x3fec5be902ad5467, 0x28a29273c0e36f3b, 0x676b638ccc47e33b,
        0x3e2b1cd9d8734400, 0x6f21bfb7390492d7, 0xad670e632a375b0f, 0x469962ec1da8ac5d,
        0x45eb849ee29b725b, 0xfb2e3d4c4169ae44, 0xac57e11362ae8e01, 0xc6a0bf3a4cce9480,
        0xedf3920a66614339, 0x125c34d7ca7c5f88, 0xf0881e2119a0668b, 0xdf35304d0608f50f,
        0x4e2e5a7e7f2bced6, 0x554a9b0fec3cd7b9, 0xe71522d2ae43b9b4, 0x6769e31d4f826f34,
        0x70d8141ae184d925, 0xdcc8295babcd2f42, 0x44dfbb5086e38e96, 0x3a2f6d77dca00d1b,
        0xcb7c15efdc088c50, 0x58a82d4b8eaefa78, 0x51b9a0a93eea3fdf, 0x6942a7e4fcf50251,
        0x09a231d1962534b6, 0xff3e57d2c476ce64, 0xa80d76eda5f93bb8, 0xa07be4760314524d,
        0x105119fd42e1da50, 0xf65e909b9e84c791, 0x677cc51b6f6c1219, 0x91cb827e49c24238,
        0x63cd65d481d735bd, 0x947e74656c21bdf5, 0x28ad34785bb3fbb4, 0x6ffc31c525bce9e3,
        0x7b415276142a6768, 0xb568bc974b8c598a, 0x2ba05a8f3b84d777, 0xe77fd5f2b5778247,
        0x822a6c2432697f4c, 0xe31bbfd9a9b6df3a, 0x528398a798641ec2, 0xb6bd39ed7e72aeb7,
        0x45fa508a85189260, 0xff6cd2b0117cd63a, 0x2c5c1e9e7878b781, 0x6a4759c110fc3ac1,
        0xbda3bda2198a6075, 0xeb71548770f9fc9d, 0xe3246dbb8b907b23, 0xada6987757cef318,
        0x6abe5cc388015785, 0x7005bcf995efe710, 0x11bb84d91f6edfa9, 0x3f52938530db8c1a,
        0xa71e6854c5040212, 0x93605d178f7e03b7, 0x0560e7e5c9d2441d, 0xbde5ed1d0e1af754,
        0x81d8f4660977e2bb, 0xec780d9c2cc6c8b5, 0xf4e2dfb17d3deb26, 0xb1c52facfecf85b2,
        0x59f9329af01ea540, 0x61ea1385c3a3ccb7, 0x15922fae9520db97, 0x09761c358c58c3b3,
        0xd41b5b6d14c6eae9, 0xd4695e9b0d13bce2, 0x4d83804cf473edee, 0xd434a3b085355854,
        0x7ea619034b638a46, 0x9903eadbd1f47795, 0x7b7937891f77bf0a, 0x9b4c69679a973742,
        0x7af408e24487f6a3, 0xce75ecfb27916a21, 0x876e36276a231a41, 0xfa1dd9340a955cec,
        0x8543f2cea2f10304, 0x48b29a4fead078b6, 0x45d3fe7d1afc2d4b, 0x36f55f89b40ba0d6,
        0x90393d7ac9a9ae2f, 0xe8a181cb493604a4, 0x68e0d1f89e57e450, 0xf5c100489c5f6298,
        0x70417ce1afa92f75, 0x5b509b7b6f583ee8, 0x3264283d5a728480, 0xc0a3aa351ab4c447,
        0x6987117db7f6b1e8, 0x257bcc2daa52f3b1, 0x593afe4a148b7f64, 0x58adaee5daa3cb55,
    ],
    [
        0x07e6ce4d033fc12a, 0xe9730aaafd120134, 0xec2a932584782513, 0xbc970210a1371aa4,
        0xa6b1992f8c9d34f6, 0x63778bfc3dfdc228, 0x8fc3e370ddebafa2, 0x528a9e2f5876d6e8,
        0xdf9bcd3a2f4126e7, 0xfefc54b5577dae35, 0x97e480c6ca33f42b, 0x6e6cf29899229a90,
        0xfa7524967be26441, 0x62e64475ad1cac22, 0x1a4a5773339aae8d, 0x870b12dd12ee579d,
        0x2a32c989d7a191ae, 0x26c7f24476a164be, 0xf1df375260657650, 0xafdaad3b29fb000f,
        0xb4b2543b8cc2a866, 0x787229ccb8a233c3, 0xad1882f5b16c805f, 0xf44eeb994620e739,
        0x4bc4c079f3a95f04, 0x8cad8f875ecec6ee, 0x725548dc62070042, 0x23c6a22ddd6eb876,
        0x8801ce046a4b08e6, 0xc1c0650c8a7b2458, 0x4e6e4b4f7d7dd541, 0x1f41010b2c439171,
        0x525964a9728572c1, 0x725177af28e11f62, 0xa5dafebd3be3e582, 0x6476dd403039a4b7,
        0xa56bb58950fb1b6b, 0xc6dc70eb3872f0a9, 0x9c31405ed63f64eb, 0xe3808e725472d67b,
        0xaf4c18e38d5b000a, 0xf2f08a0925948852, 0x15e5bed3ac25bd3a, 0x5a1b2634e8f7b7af,
        0xe032d7c165dd5561, 0x1c896beb61f5e655, 0x22c1fa8ef0438565, 0x26234b2e56730245,
        0x79a0e31940969df4, 0xe14ca6a1dc032002, 0xd978cd730f1559ad, 0xd631907f7efbbd16,
        0x0720c58478e2e86d, 0x00db635e742d7b1d, 0xc502cf2f2afba4fe, 0x83af640e1f913210,
        0x2d6789ccddc4371d, 0x95ec2fd963093df6, 0x3b7dd91afe2ad7e8, 0xb0ddc129d1c9d6ee,
        0xdc3094247350251c, 0xcc34d15e88d60eba, 0x54888ac28ae03edd, 0xbb45c28718d13bd3,
        0xba4f98a14886f316, 0xb22b9089c057309c, 0xd67c8ab72903d20b, 0xaff481a054b5424e,
        0xaf062ffea5ed969e, 0xc0bae0adb9648a36, 0x15ffcce0351f9f04, 0x93c48f85d2b622d7,
        0xecc22d13d62efebd, 0x9d2f0546aac3a655, 0x20a5103306e52a05, 0xa6840bc81d71d532,
        0xf52cb1b60ef683e6, 0x2008653ec7e11395, 0xa775b9520c0fe175, 0x2a9a12ab06dd62d6,
        0x00a251634e58caca, 0xbd83e20ba72e974c, 0xa5bbd8f5cb1b8d9e, 0x1977a8dec20f56f5,
        0x69f23f18effc0cbf, 0x44ef5dd83419867f, 0xb74cc0ed7ccf9e9a, 0x7663a596f4159a9a,
        0x0b43e660a8626015, 0x4aefda2d2a06c242, 0x74d71526c274916a, 0xbd98ad9aa343dc3b,
        0x66f31460b13bbe9c, 0x82ab62bb8bbc6aff, 0x812feac7fe5c7431, 0x3ff85ee6e8139388,
        0x8a4923a2fadbd14b, 0xc8e120a18a64fdf5, 0xd9f545ba07399295, 0x85de9baa018ee2b8,
        0x98dc118071d2fb53, 0xb2f21248dfb642b1, 0x9943c34c91d2f1c1, 0x73450378ce74546e,
        0x23b0edd02b6d561c, 0x4036bbb7406d1a34, 0x1bed3c336b17971e, 0x1fcd743d81b1612d,
        0x6c3420fe442bef09, 0x75c4c0499f4bfd2d, 0x8e3a2ee34cb43ab5, 0x9a04c15de1b54be4,
        0x75e4632c9ae34b31, 0x9a780e5705505a36, 0x2e877fa286b14d3c, 0x4fdc84e2174f1fd5,
        0x52fccffbcaeead35, 0x5c0b280e29f0d0f9, 0x76847ae06776dbf1, 0x529a29fd8d505edc,
        0xd768f5a6f3618fc2, 0xfbc637687c0eea52, 0x29134cd7b4ebf343, 0x373dad7457db23b4,
        0xfac0c6ad7c811130, 0x45851bf4a0ea1a51, 0xef3e9865a83b554b, 0xbbf3a89423c6dd1a,
        0xb24b38f3e66f3f11, 0x98e7956584726ce7, 0x6b65b262157f9aee, 0xbcdf91fd0e64269b,
        0xbca2580d3a6d7ae2, 0xda8cb8ab015a99b5, 0x3fbd5f5c45b0efdc, 0x88d9eac83e5411d7,
        0xd9b29b4b10943242, 0xb96bd298fac31d00, 0x85e872550a9be572, 0x803e540771e3a8b7,
        0x1c96401f39dd611d, 0xa875ad01d9479c4a, 0x7b39ac1b5d5d5ac1, 0xbcd52599071d7582,
        0x2c6501b8e4a11597, 0x64e9c241da31de06, 0x9e0d944781b6af13, 0x450faf6fc5b7ba77,
        0x0db4682a5308b9b1, 0x00316d2279d3d8dc, 0x9635af237b122dd7, 0x79c54f42b4b745b1,
        0xedb31526246ae3ac, 0x46a2103357f00a7d, 0x3269851e6f098d01, 0x61933d0356054515,
        0xb174e8874d87114e, 0x7b3665d76ce6989d, 0x6bdfa63e340297b1, 0x4ada4c7d8f077633,
        0x03830df9cd90b61b, 0x82ab73dff24fb357, 0xd9f564a4676f9598, 0x0c945aebfd7365f2,
        0xa4fdc6f8a1b78e04, 0x86838f0f65bbdfc9, 0x70ad75d74fcdbf34, 0xc1b1b66eea1d58f7,
        0x11b67ef00d6cbe27, 0x1cd57f0823d2dd87, 0x046fc1cdbaa96968, 0x6b065aa23d420398,
        0x1d390561a64eff47, 0xb8799a1510111b02, 0x457df338232081d1, 0x153fb6cfee89282b,
        0x4a47585c68e8df30, 0xad93852e08cb2b29, 0x01d3dc943660f189, 0xe81e89b35c277996,
        0x06f28c72587fd1b2, 0xafa7e616eabf9b35, 0xace02706a2c3c83e, 0xdf3d3090d6b0c85a,
        0x77065e113da93c1c, 0xf767b2868b64ea48, 0x49d1c305152864fd, 0x7c178b0bb416c7df,
        0x3817aa1a6a141269, 0x5d5f9b3082854ee0, 0x47b41822b7612fe4, 0xc8171c5e13b9cf87,
        0xe3f6205a5ea4bde3, 0x0e1431a0d635a584, 0x547be60c69f964a2, 0x18bb37bbb02fc7cf,
        0xf30cd9e6c8999158, 0xb045cccb8366b58a, 0xb82166230fe3b460, 0xb7e4a6ba00a70e91,
        0x499ffa74670136f9, 0x3328a51cee69563d, 0xe8bc857ab988b582, 0xd5611ee46afd9a0e,
        0x09c5a35b7bb19083, 0x3e6cf633804b30d1, 0x3f183d4911a511b6, 0x7a36193aa869c457,
        0xb3e45d097f1891e6, 0x022bc0f01cdb203d, 0x8572cecf624cb828, 0x93253964e5954518,
        0xce7fac5317037e08, 0xdcf3200390bb1410, 0x48a209035c3cd11b, 0xa8d3493759db9482,
        0xa8536eb641247209, 0x91910c3a7ed125cf, 0xb2e01cb7f9ec928c, 0x4a64b769e45cd744,
        0xb2fee192f348e94f, 0x2ad7991f7579e973, 0xecc11e5598009910, 0x9976011a824e6023,
        0xcdb00f4a79c2afe9, 0x2d5d161844724879, 0xec00bddf9294431e, 0x2b47dc0d96c7267e,
        0xbea745b039d9349d, 0x1d04a8b540b28364, 0xa6ce7145b239e00d, 0x2b576e4fe34c2a7d,
        0x679d789bb1b50e9d, 0x11a4387e4704dac3, 0xda1b010d7090256f, 0xe758b9c741e06643,
        0x0d8fbf07902763bf, 0xc76f8641a4c2fa0e, 0xd1293d9b482ff47b, 0x5901ca12d79d81ad,
        0x4a4a40e42a495467, 0xa54deaab008b00c4, 0x90ad950d0d2b4ddd, 0xcb277b4e5f79f1de,
        0xec36a9129e48bf69, 0x7341e2c72c8a76e8, 0x0012645f4601c550, 0x46e238866897ea43,
        0x4ea3fbc30e27b3eb, 0x6959b0ecf75bc633, 0x3afd83d080efc220, 0x77431dac4f8a7153,
        0x1aa5a92fe10b4a6d, 0x914be21f176ea156, 0xf6e16fd58f76cd2e, 0x2dfc779234f5348d,
        0x00705387a77b998f, 0xbd387023e834ffa6, 0x001bf327ee0419db, 0xd99edd796f69d439,
        0x93e5789749d1ab0d, 0x74ef8ef44164cebd, 0xe8322fbd533c7db6, 0xaf18e5baf1c43b2e,
        0xa2a9ad2c2b889952, 0x5e19098e43195f4e, 0x782495e8c183c500, 0xd739ca0ebbbefa73,
        0xa2f002b800a5d5a1, 0x58b3ef6eb6b06e46, 0x9524e286045ac045, 0xd29e6592e976ae5b,
        0xb7f532b1659fd516, 0x5eec4fcb55c0601f, 0x28319d57d003617a, 0x11ee0f31644c3385,
        0xf02098c40a885b01, 0x62ad0125835d2264, 0xa24820b634c1eb54, 0x35fad92a579501df,
        0x6893a7dffdfacc62, 0x0b7f0e4a541165d2, 0x96c2d9222b4368cd, 0x617a63f312586de6,
        0xfede22837c822d05, 0x701287aa7e9e8510, 0xee4c6165b25b98c0, 0xa2501197eaf49f63,
        0xff2f84bba6c3f13d, 0x09627e2696c66b86, 0xc1971113c1fdc758, 0xb12b48a70410de25,
        0xac47422962d7eb73, 0xd4fa229d1e4d8d58, 0x136bceedcd04b9e9, 0xc2b1bdf72f732803,
        0xda198336372c4015, 0xb8091a7ac5413b59, 0xeec55752e6677d20, 0xe1e52b537f111b3b,
        0x0262f26da4bc6856, 0xd77ff7fd185fc036, 0x802a300e68106365, 0xbe6853d87c3c5ffd,
        0x92b8a6f52762eae9, 0x8cd2c71ae1042350, 0xa8d2676092245e3e, 0x2eff44b32ed1962c,
        0x74874436daa3cdbd, 0x9679e34d2e96f198, 0x1940e14aef6189bd, 0x97cca980416577ae,
        0x7c1bfba011ba30e9, 0x47e34c3bc9f63154, 0x3552517e3f2f0d27, 0xf528888841c1367e,
        0x996cca7f34648a96, 0xecac86d12a05c368, 0x091c7b12a977b5dd, 0x9b9a662d985cabd4,
        0x2c9b44579549f3b1, 0x64198ddf036ab1ae, 0x92fa0800f20c7005, 0x4e27a58f169514b2,
        0xcfa3aa4d30214280, 0x41e71fc8c5e00e5f, 0xf3866d1500a243ff, 0x46578c7ea2f347de,
        0x945f306efd132dad, 0x657f4ba5a998010b, 0xf33a87fdfee0ae2f, 0x6082dbabc5ec48b7,
        0x4e300dddacf4e8ed, 0x74c45dbef7b8410b, 0x0498d2964934c52f, 0xe82c8712adfecd58,
        0x99cf64dea7002930, 0xa1504f91b168a484, 0x175c4766996fde09, 0x6c24de9da8a57bad,
        0xd375c03db2e4eb6e, 0x768c86580ed6605c, 0x31a3c3305284dcb3, 0x1d81bbe3289d7c2b,
        0xf3de226fc557777b, 0x15ed1b93553eeec1, 0x8eb84b03a0ec45d1, 0x04984a9f7976e7d1,
        0x8d50c49c8f82b14a, 0xb296a0380a18da53, 0x8a07b0d202c5939c, 0xdff2122fd60b0c4c,
        0xdee45c305c0de4dd, 0x1d547caec81d38c1, 0xe32f572f69a001de, 0x3ba7a11a177242c1,
        0x7b7651388b808ac3, 0x74ee5e20fad0a9cd, 0xb9ebeb8d44ed7f96, 0x37aea3909f8e48c3,
        0x5da50baf65781ea7, 0xe58940c609b5fa71, 0x8eac5d0624c9bb42, 0xb9ee0a5d83498731,
        0x7c1b59a79f4f2101, 0x53212bd6f5acbd16, 0xa8f27aa1e51978c9, 0x16d3efb535e1942a,
        0xa204cd80c9a3d133, 0x2014b85da8915596, 0xfc1bf8d54964245d, 0xbe36a64072883505,
        0xb3f7409fcdc2f2a3, 0x8c2661c090ee26ca, 0xba7f615f2cdf5e89, 0x1f5a96a89aa08fc3,
        0xfc6fba671036ebe6, 0xd616b19fa524bc76, 0x0a2b5006fda48969, 0xf1518939b838c91c,
        0x517a25b94e2a4f52, 0x255cb9c073a666a8, 0x7051bf6b8f99d4aa, 0x588a6ebc4d971de0,
        0xdef6625b533a61d6, 0x46e5ebb19124b684, 0x1e11e745cdc1ccda, 0x80eca1ca66e19ae4,
        0x0ca8b4fd0a814831, 0x753cf9064479468e, 0xf1194ae2a0e5aaea, 0x19ca736df009638f,
        0xfd05b88415cebfd7, 0x45f29a844047ccb6, 0xf069fe20c64d1dec, 0xa0ab10dfbbdea0ec,
        0x0d26b600b4cc58c6, 0x02675759c278458d, 0x1fec54749b636528, 0xbc83a440f714686d,
        0x56357ed4f2cd2d4d, 0xb9cf98b11243026d, 0x168514b204878e13, 0xe8ff408c5533a7ba,
        0xb6d4f6c170d4b81b, 0xa31abf17fc44e760, 0xd966cf59069c2ee4, 0x1d60a274ddf3d371,
        0xa68c8d8c0d7f4265, 0xadf5b4dbd24e020b, 0x733ad06826e5b3ac, 0xb00ba446cd2a0a6b,
        0x21ea4f6e0f5f1b5d, 0xf8c3af862bf00fdc, 0x9b36c17623147c40, 0x1a6a3abbbab3df90,
        0x3e1dd748fba2e933, 0xbe8991a4d0f76658, 0x048d7776b907f044, 0x44e6cee76504ff87,
        0x882370afd0ca219f, 0x25a59aae5a40ec4a, 0x068b43a55d136280, 0x8bbbb61e944f1cf3,
        0x00b3a6d4550201ba, 0x70fd51546a75397c, 0xc2f6270e8f4120e0, 0x49c19631ea8154f4,
        0x663d9b3851240642, 0x4ef7431f0408cff8, 0x6ca0eddaa6a6a4d3, 0x3491f2073b56bece,
        0xa441ecfdd1ff23cf, 0x1228b3e497ddd1dc, 0x31206c72ac3d97eb, 0x14a1fac0545e69a0,
        0x0e50d7fa1951c078, 0x9c6dab3567a6516e, 0x698101aa438a3781, 0xcb014b3356c05c30,
        0x0053a30cd3231aed, 0xefc9bb54632ac100, 0x568863ed3c3e8ec9, 0x81e17838541f3281,
        0xff95ac4238b1547c, 0x5e4799d978c0eec5, 0x9f737902fed218fe, 0xda9fd894574cba64,
        0x4eda7e2a7e4f781a, 0xa316fa44233b3c6d, 0xa785ec10e471f822, 0x0470e9650788696d,
        0xdad179db0b10097c, 0x78b5223f332ea72d, 0x3e93eb01b9287b3d, 0xa6563f1ebd1acd29,
        0x653e70afc7a5627f, 0x833a54436e423da6, 0x0b6dd98af4b08816, 0xb1b7ebe4f1633e03,
        0x5a53863a50062651, 0xb2ef4956acd30bd1, 0xec6f7a37c3e9b84b, 0xfe19344a0c21e3ba,
        0xa94cf5c53447951f, 0x6a009debfb3e5a1c, 0x58a541d7ec83a771, 0x660a74d9eace56fa,
        0xa2b5e9cd7ce5f297, 0xc91848acbb22e570, 0xa74eec6fb3ff9335, 0xf08e23e546df1233,
        0x55a628eb15c685e3, 0xf05307a3a7493b8b, 0xced3679e93c5a962, 0x5b64e7f57d059d46,
        0x68627cf0c1818095, 0x55776951b220dc06, 0x396054a2de2eab3a, 0x854bbcc6b66ffd5f,
        0xe9dcc6907c51124c, 0xf1508662cf11a976, 0x4a474e6e5ca10e67, 0xb2605ff69d19f26c,
        0x28dcff7b9d1c23e8, 0x73be91f33727d6cd, 0x2e1b66244c559b6b, 0x5cc7ccaa86c59643,
        0x988b89f7ecfffc72, 0xea5443755c59ff75, 0xd9ae9fff07748faa, 0x8f5a3479e1c08746,
        0x39a0b4c277ce53cc, 0x45aa9d99fb082c4b, 0x4cab122324c9526a, 0x0d75e0c15b818cfd,
        0xd06feb584550ee57, 0xa97282ce4a3b3ab7, 0x39dfd972a58c64cb, 0x76dbbcbdd6f658b9,
        0xd97ff34eee8949f0, 0x7c8edc4b46b4b34f, 0xf568a45da9e22357, 0x1944765a05ec9be4,
        0x7f0613d9ee3ac524, 0xd9abba10b4d96a7d, 0xd99d5c62891edec9, 0x7003024465b2bde5,
        0x01d981b6d9b9cd4f, 0x40ed89898fc05a71, 0xd8112477b752c612, 0x7e0f0cca651e6e67,
    ],
    [
        0x88ca276c4b8bceb8, 0x5ccb8c75e1c58c80, 0x3087444aa1a8781b, 0xec25045511c09289,
        0xb7d3506357ae1213, 0xe9130a63103b5fa2, 0x30af23b3b95eeddd, 0x164ac67faee03999,
        0x0f8d9a2fe8f78545, 0x947ceaffed059f1d, 0x7d14846832d5b2e3, 0x8ae82a1cc216cf37,
        0xb32115e2b9f3ee06, 0xb7c18083fccf76eb, 0x02ecefa68ad9e323, 0x7eb7f516da0abf3e,
        0x0bcf25ad1b038ac6, 0x997aa2a424f2c6b1, 0x5e946e00909b8a41, 0x9efee7047e1754b8,
        0x25d9eb827bada472, 0xd1ef53cb68caff21, 0xd3e6ecad19c7a275, 0x18eac9530fa12b5b,
        0x6bf62b691a2b1579, 0x43f51810fbaffded, 0xf8844c3c157594da, 0xd202853b60aa5c14,
        0xdcef4fadfb3f4885, 0x0a89e741edf71900, 0x83abd436d83701f4, 0x2cda5caee30ae90b,
        0xa63f4b34d75e509c, 0x9692c390f8e4eede, 0x17840d2f1791644e, 0x760ee8460228346f,
        0x7435dd7847d372ff, 0x5014123427a91ef8, 0x6126d74479d637e6, 0x46b42c00ee8f9dfc,
        0x6ee9b790e714187d, 0xdccede337ba27baa, 0x9921c0a652e00dd3, 0x1355c4124c756c70,
        0x9de9d3f43dbc00c3, 0x6e65d7c610a0c0bd, 0x6be99d80f464825d, 0x2444c682a0cb5443,
        0xd3caad733459cc8b, 0x4b75ff6ec1e8e564, 0x3c1f6895f14b31b2, 0x290ced588305624e,
        0xf5d374960cc4f426, 0xbd31c5cf80e3d909, 0x1437fc95e511bc3b, 0x9b4a7e38ec454423,
        0xb378d92c7c952984, 0x30ecd0c7af986d1d, 0x6d75e9625cbae56c, 0xf0c73bbbc5454439,
        0x4890be893141219b, 0x592164dde23cef63, 0x864f2fd592966739, 0x681a38c765604726,
        0x6d4ec101752d1106, 0x2ba9de0483fcc95a, 0x6cb5b7065cff3cbf, 0x83042ba7164079c9,
        0xd536753a97024ecd, 0xe97f71208eee983b, 0xfd1d565a89985f3d, 0x4de174d379ff7f91,
        0x091643db3145b086, 0xf5754d037460a186, 0x7796b94c6335f566, 0xac437f45773828bf,
        0x1bc12cecdd6346a9, 0xc693bdbbf93113a3, 0x16c812480d45e0c9, 0x3c92ac9461b3381f,
        0x35388760ddf1becb, 0xde87114f9e536a91, 0x55f7d23116a3c156, 0x54085471b1c0027b,
        0xff84d98c09afd498, 0x3cff018c5074160a, 0x05ed04513604b2dd, 0x45ccf07377d159b5,
        0x3b67b87bceeb29ff, 0x3886ccb40f6fd7c3, 0x2a7b514fcac628bd, 0x1dc35d343850cc05,
        0xa49debb23267f912, 0xd679b841d514d93f, 0x56e8bfe84bb9cbe8, 0x2cc34290caabea0d,
        0x9122bbc5b9a6c63b, 0x3b5145510e95a902, 0x3e32b3db3b7981e6, 0x108765b3c5cff077,
        0xbf9c7149f005c006, 0x2f4f59375b77d060, 0x8491f1a8d63b4aad, 0x3b8e85099e9b7f58,
        0x7391ec2a9d5a656f, 0x1af4476a4b712a97, 0x98e8707af1d7e1af, 0x2d4c4eee0fa089af,
        0xb846152f3f7d61ab, 0x1f6930d7b3c0f6cd, 0x1cc837199a0c1293, 0x264c26624b743ee7,
        0x08eeb442181b16c2, 0x6185413ce451cf42, 0xad42d951eb951fad, 0x398956a806650920,
        0xa59bffa859d78369, 0x30caad3ba1f034d1, 0x22d7bc16834d0889, 0x27405d0896ff4c8c,
        0xec76370d72ae34d6, 0xa2ae53ed4557dd65, 0x77fae15296dccb89, 0x7f1b9b18a3a24b5c,
        0x7afe4c2f7883fe8e, 0xfe57d6e8f7b4aaf2, 0x7435ecc5d3cfd83e, 0x4f8c6ae3247a421e,
        0x2ad98063f834dcbf, 0xccdeb0eedfccbcf9, 0x7673a8e483082714, 0x4881640c6e3879a2,
        0x9d68071624938196, 0x54b7f85be8749cba, 0xfbb531734c254738, 0x063e4943548da6ea,
        0x5915a58223a1bcc9, 0x37698fa60164ff7b, 0x693983d66769b8bd, 0x8c12ff189d51a85b,
        0x6b9c2142321242fe, 0x215ff05d66e03205, 0xd4b6253d2757306c, 0xbad7320ed3418870,
        0x5734bf378a1ad137, 0x01938bd20f819ec8, 0xcd9524648ac8f8e3, 0xc5e7a6fa45af4e6d,
        0x5e2c1ffe56ff21f4, 0x609a468898f982fc, 0xdd1d87e200c71863, 0xa74804446e844a0d,
        0x451ffadb40d4b996, 0xb939247b13c31946, 0xc023e4e2c08c5107, 0x8014357e0cabccfd,
        0x6417d37a1e121cb8, 0x8878577fb0a03702, 0x5b545cc8c631cd1e, 0x564afcd941e67856,
        0x8bf792a317942443, 0x45c1670c7360623e, 0x2d0830a5d3dfae10, 0x22092b39beb12160,
        0x624084b97a8d0e81, 0x1be8269ec2dcb03d, 0xdf97b7369816b82c, 0x83df4b18d36e8e89,
        0xcbb55ec6e10b20f0, 0xf0aaabec8a8683ad, 0xaa7aa8b8df03b040, 0x4d8425a83b8a01b5,
        0xc060fdbdd0d74549, 0xe4e0a9334d783d6f, 0x76616803e7e43c6a, 0xd7a1adc4a303eb20,
        0x3444abbb70600d33, 0x0276d3b6162c3150, 0x5b20a169b8f10fc1, 0xd057a47bdb5bd5b6,
        0x7ad4cc11f0a46b04, 0xaca74fa1d9c7c342, 0x62e545b2c5071c43, 0x9769f0970c462f7c,
        0x1fde0bdeacda665b, 0x97ebccfb7d618a1d, 0x275c49466cc0e535, 0xc5bb48dc51fa7d6b,
        0xc27bd13c59b86241, 0x38a5e2c9e8aef9bc, 0x8516d277ec4249f2, 0x1a51eaa01294956e,
        0x4da81d19dfff19d0, 0x1d667d4f70f3d3ad, 0xc4bce0150842a792, 0x77c5babc802452ee,
        0xac1bee4c44ed6d4e, 0x69976910bb1bca55, 0xb07ba56a171170a4, 0x5264880bdb7ccdf7,
        0x97348efd8a280fc7, 0x630900d235805339, 0xff0306aaed5244fa, 0xfeb563be34c16578,
        0xcf9b9bb35c68ea06, 0x4424aaeaf76d2a12, 0xe90203a381e42d04, 0xbab7a12607dbe066,
        0x92f3a250b7645056, 0x012e9031ef772a43, 0x7c5184d4cd8d67f7, 0xb4d3cd5830048569,
        0xafd072012f2f3a94, 0xee5caaac562a099e, 0xd9fc87938cd23356, 0x4404e6c6d77d1c18,
        0x10c6ae50080978f8, 0xbc1ee613aa1fd72a, 0x6c1644963f2722fe, 0x1aa44ce9c5a5225a,
        0xa6d871fc533e94c9, 0xc9607b7885a209ae, 0x6d03426f955aca7d, 0x210c7a09cf6ef8b7,
        0x95b05d687f4f70f9, 0xf7a74f556abd2a82, 0x1b28d1186cc6dd0d, 0xa631d553b63001af,
        0x50b578f34840496c, 0xa293017c9f65043f, 0xafca2c36796408c1, 0x09631af515d50555,
        0xbba3b57bec3645d6, 0x138cdac56fa8e84c, 0xb3ba8b23dff6bd74, 0xcc26b8a9a3531d3a,
        0xe722aab27b273702, 0xc945ee7f70b20ad4, 0x6fa3371591cc47ac, 0x3f14821bf60a5b98,
        0xaa2a39c4cd0f8e70, 0x844539e03aea9c55, 0x284810bd586c61cd, 0xf2d85299be9e119c,
        0xcbd63351b8e21b9e, 0xac722cfc9565cf8a, 0x4c644d488cb4acd6, 0xcbda54127dc946aa,
        0xc8f648f4b931afc1, 0xcbf5414911eed889, 0xc4a400a981781318, 0xd264d6ec8b05a553,
        0x1b9720f5aacebdc9, 0x576bd78c1ac2b10b, 0xaa7e1a8afc158b34, 0x0984b1ef47c9b324,
        0x4ccc7cd23a9828ff, 0xc6aa14a536269820, 0xae71a03353e2a531, 0x7a7759a67088f360,
        0x6dd9c9bf33e95503, 0x9ec4034ff4e621d3, 0x5069882c294d55d1, 0x4a18f34b49b992cc,
        0x3f9d623665eccf5d, 0xe467a6beeddd6bbc, 0x2e90d41a89b8e801, 0x9d9353b6c6706966,
        0x7fe554ac920d49bc, 0xb23f2782e7f30891, 0xbcef10fbc13782f0, 0xe7ce59be2def303f,
        0x6ed926a4718a5ace, 0x1578eb4c77aa9256, 0xb346896439ef93a7, 0xd2c20014f3ae8e79,
        0xb0227fe6cdb673bc, 0xf650365bf8c6cfd7, 0x3337f8ba0036b81f, 0x003e43a6ce1af18f,
        0x959d47e22c242dc5, 0x6d40140a631fd790, 0x842e1d06c03a22ad, 0xa3cef9203a8444b4,
        0x89f802082e4834fb, 0xb7bd061659432a28, 0x049fc9fa2f8db817, 0xc316d352f82a591d,
        0x57d7dee513b70dc8, 0x99b16e7e24e8e721, 0x944a988978368274, 0x9340cac40af3d43a,
        0x414ca2c1b52a4266, 0x1678dfe08caac401, 0xc17f3f017a8e8058, 0xb7906b77ef1ee3f1,
        0x9c3265bce18322e8, 0xd2d50b00dc78b1ad, 0x2fd0faab31db8c0b, 0x6eebe11b7ebd9eea,
        0x9e54f098d81b6f6e, 0x521bd135034b0265, 0xc3fdb99bdbfc08b9, 0xa439102d1a1d7661,
        0x5fc6ae8f24836d70, 0xfc629ee642e9d70b, 0x0c4a89aae863d781, 0x4783095c7c5fc039,
        0x60d255e65653ebbf, 0x8b172ce65b42e582, 0xd9efbe5068246492, 0xdacb510fe7dd5146,
        0x2b55adb2b960f6ce, 0xdd0ff0e7d8f2bdd4, 0x8b9f872c77ba50e6, 0x123caaf2e9371f83,
        0xa054e203f6b2174c, 0x2357944c14309d10, 0xfc0fc22bfbe640a1, 0x3749bd0d597b7696,
        0xf1e389b02e64b332, 0x329a308b0fe87940, 0x147b28f88b5315f9, 0x02da352cb74be7e9,
        0x5ee9f1fd88fc1c3d, 0xaad567ed695e17da, 0xae0385c4792694c1, 0xe16b6f4d14065870,
        0xd1a3493701ac8146, 0xc53bffec5e36b12e, 0x1af09d8639e732f3, 0xcdc6eb5a0cda8733,
        0x90b3a9b437aedebb, 0xad814d5e062db479, 0x823efe5d156267d4, 0x0bf1f2372d1e0c9f,
        0x8e63f0a2b967f1cf, 0x052b408861a0c8ed, 0xf4aa0b7e4e9058c8, 0xd0b6af13849f3f23,
        0x58fc0e7efe8d7326, 0x2652aa239cbc10ee, 0x63b5a762b5300622, 0x8a82808117fdffcc,
        0xced9e9225423e158, 0x9382e3bad26b3fd9, 0x5dbc286537ddae0d, 0xcf3f91b3c95384b1,
        0x27e83f0fb353452f, 0x0da060a2ed567145, 0xfcec1799dc59675f, 0x5fe8cc4dab43d2a1,
        0xe84259edfc376fdd, 0xae52fa2a512f1401, 0x310da94a55b1bf81, 0xe6cbfb5460d338a3,
        0xa3c302755535ef0b, 0x4942d8ce968b1716, 0xb3335a24e74705e2, 0x8272dc834bd1e17b,
        0xdb49b0f393328c91, 0x26fc0b72696442b9, 0x4697e9bf2819b732, 0xd511a79792c0f858,
        0x32dbaa5f9e2fde1f, 0xeb5d96e00fa9be95, 0x66e1ef2d68e2b249, 0x47c25a378d8a5a1a,
        0xc119be8447d32fd4, 0x4eb9b7e60be610c9, 0x2eda48479c235d5c, 0x72f7e7cd05363915,
        0x3eaa59af4d6b5843, 0x9e99e4e59b0607b2, 0xc9d169e7cbd8ad0e, 0x9c9a0d3930507b37,
        0x71b3bdd47336a643, 0x6ac4a9fbfa769e74, 0x971b6cb3a138eeb4, 0xdf5da393b149f564,
        0xd4e7b95260f6de8e, 0x9933d7eded0ed94a, 0xf287767f91121fec, 0x9d432b7808e57ee7,
        0xe2fb6a6c7308b81c, 0x39869970ede5cfb2, 0xcc4601336c5ab37a, 0x15800cdbe0338289,
        0x4a701ff421654473, 0x7647f054cedb2ea8, 0x0a0c792711225dc6, 0xd32479ac4cdb0e21,
        0x1b8e51288ad0d5c1, 0x06dfd3f9f831fc7d, 0x96d14e1f320ccb1d, 0x033c186e3e4953db,
        0xacb181e07695af86, 0x347ec1d04aea78c3, 0x18add11afddb0092, 0x12c18d1e38f418dc,
        0x6d9cccc9d835fe33, 0x1153a3306ab5a380, 0xa409403e4b7c713f, 0x3a1db91517982a8c,
        0xb988d3eb191bfd4d, 0x904fd66e6ab86f4e, 0x4cf696f1ce8800e3, 0x91b63c11cabf3d17,
        0x9a212d4c8d8a68f1, 0xff414370b3af96c3, 0x46dfc88d0342bc72, 0x1d625ba1c9e5da54,
        0xaf009f3ce1f8f322, 0x44e35a7a1a449f52, 0xa00ed3920455f095, 0xd8ebce978b4e9470,
        0xf8c4c4ffe3e313b4, 0x46c60e803f3a09d5, 0x503061ec0d739056, 0x2280ff0c7ca3f604,
        0xd4b808c1b50f7f47, 0xa9b55faeae36e201, 0xee20002346e3e3b0, 0xf160bfd94903faac,
        0xa911db7249c2bbec, 0x12cd5d8b125bf11b, 0x2dc3a5d00425b866, 0xaa863f01ec49a0c8,
        0x14cc99959ebbc796, 0x834c28c2357ef592, 0xd3d8ef7f64a4a438, 0xdf4a48dba34c66a9,
        0x2b3f37710d6000ce, 0x8c53fda139ca3d92, 0x8e141950e6005150, 0xe46b90d1df3e2968,
        0x90049d259e1df2e2, 0x284eb5799446ca45, 0xcb7365dc798ae01f, 0xa605730b05ded0ac,
        0xf66e77bf73cc39e7, 0xdfdfc7e993e5abab, 0xa7e7d1f953f552a7, 0x38e02eb6853b9bab,
        0xcf7b1aeaf4558633, 0xb8792ea30339f299, 0x0ce482733f590dcb, 0x3092afe12ba112d2,
        0xc6df66b25bcc0ac6, 0xc33c3068f601bb2c, 0xb1dd088b540dde16, 0xad69f7c9501688c6,
        0x9a316450bd2ffe36, 0xf85f944c09fc7433, 0xadcc5f08e22867c9, 0xce8151f6162bc9f8,
        0x5cbcc9efd581dd11, 0xd995fcc4daef86ac, 0xbaf21c6fc05dcece, 0x2ba46a66b2e37f7c,
        0xd1c99c55fd567fea, 0x3d0f0a7e6a2332f2, 0x27068a29b104561a, 0x7fcc5e3eb85bb676,
        0xb1b5efee31f82e18, 0xa3e7f085132f5675, 0x9d55e33c41a83e50, 0xea3c8099f9ffcf90,
        0x824990932474d8b6, 0x6a25bbc32d82f3d8, 0x12cb326107e3cbc3, 0xa4dedc21ad26f286,
        0xeff3d6443708393f, 0x38c813cfe0ea9ad6, 0x873c805ca4a3c65c, 0xbf1fba37b1d0f46a,
        0xa5b77a7789319fd8, 0x9c9a2c82bbaccc0f, 0x6d7cfa5fe5096b18, 0x26c78f44ba321a07,
        0xf8e2d3da13fa8ff1, 0xf803d1b30750e968, 0x1947e940b4d73288, 0xaf48f86b3ba738cb,
        0xe6781ae29a199920, 0xcfe4bde3d5279632, 0x07bce06140630e08, 0x7fe9e9990dc71e59,
        0xf71b4df36e5bd229, 0x2a2ce980c4f82ca6, 0x4b9e7899d97816f1, 0x7fb65625a8242995,
        0x4ca6686c0eb83921, 0x08ab5b4cb81df99f, 0x775a70fca6f25b00, 0xab4673644c828c73,
        0x439893a8e602337a, 0xd2e4cfa614c2e9e2, 0x75716e1b52785efa, 0xaadb3daeaaea2e53,
        0x9a185a6de56aa105, 0x6c5464bac57c9feb, 0x5783f98f6d0dea3a, 0x7e6834726c6c7b5b,
        0xf582c5e82fa3999a, 0x0c7151c5dffc6fcc, 0x360512ce8447c730, 0xc6aab96e95bf6647,
        0x43fc1881befa40a6, 0xcfb4432287fd9bd1, 0x5e994e2ff087c249, 0x89ccee4916c5a7f5,
    ],
    [
        0x355e9d7b54089685, 0x5099dc5595e388c3, 0xde04c343def27938, 0x6376749f9b7c6c75,
        0xb2ed3d7012039372, 0xbc0da9c1c3d42729, 0x3bfd5f2cd8a869a0, 0xf0c24783f357999b,
        0x0247ee7b7edcb9e5, 0xa4c8c0167d607ee3, 0xe551ec2ecb3afa55, 0x1cdb10254c3166d5,
        0xb2b8e424d5da0e59, 0x494592042c89683c, 0x0058bb090874afce, 0x1e0bf0633fd5a1de,
        0x15ad105cd963dd6b, 0x87c6204ea200e574, 0x9e70a3fff3271bf8, 0x4161127c2e3ce423,
        0xcdc8ba5c784da27c, 0x18be4f2a0f3811e5, 0x683424f33f3db43f, 0x6a65fda84e1d5d9a,
        0x04a9b6959f85320d, 0x83c93728739b1925, 0x3fbafc5131cebdb8, 0x354b2c07e1d9a693,
        0x8d7a33e77b1d4141, 0x6835263606b296a3, 0xb2483b80e87a91b4, 0xffa1de9738f4194d,
        0xa4d6d2befd4a8a47, 0xaf08b4efed703e13, 0x5d8a3321febd27dc, 0xa224f76384eeb5c8,
        0x49ef6825e1913711, 0x1690fdb852066d70, 0xf04fd82ad3e6349c, 0xbf7e9c5550b66fec,
        0x9acf8b89bb58b63d, 0x384836413a431e8c, 0x911ec5f04b9aa9b0, 0xe834013b10aac879,
        0xd31be21d08d90c20, 0x87d6715a7ffdb955, 0xee3643943beedaf4, 0xf1b318af2988abcd,
        0x3dc535f09644e937, 0x921edbde9e6ac190, 0x546d574f8190dd41, 0x9de0aa4f5db5e5c8,
        0x15ce42d57a34d5bc, 0x76f27e707600aea7, 0xcc46bf678e385a26, 0xc6f0a0068ae66f00,
        0x9e9baccdd0ac70fe, 0x71b6edb713dbeadf, 0x6644b2347ad23938, 0x93d08bc6d8d54faf,
        0xed99fea19ec8e974, 0x14dbaff8e7553998, 0x1b800b345e3da635, 0xe85f995e2a8ed3d7,
        0x9f0ec68f40818349, 0xd0670ff5ea44e3ea, 0x3f15ca9148cee32a, 0x680eacdcacbca35d,
        0xb87e02c42ff46c13, 0x4905da24720df0a0, 0x1df48669574e7d67, 0x2c21474c26bfacb3,
        0xe29ec0131f29918b, 0x15db36d74015a479, 0x2c9bef254b05589c, 0x3a0ba2c23d6fcb6e,
        0x7e599c7561ac4c2e, 0x93596a167827e518, 0x19fb1d56606c3e52, 0x5d05e901a75b5b8c,
        0x33d18f73666941a3, 0x0ee014cb7b69e79e, 0xd2522d88d2cd68ad, 0x7e35a0a26b1af415,
        0x78a6c0d2161b5836, 0x8c05d3fc71e727d3, 0xf5f0878fabf4a83f, 0x0c0fe385345ccdef,
        0xb939cd8398d669f3, 0x692017d7fa8eb048, 0x7f8ad590b042bd47, 0x93b1fa2d97a833a8,
        0x44dabde9966486bc, 0x0ab400807f3fe1ef, 0xb9f842d70c75377b, 0x33d2726a3b996b63,
        0x4f000a124333baef, 0xefcbcf34c9994946, 0x89bce7007c525f7f, 0x8ac452f5835ba87e,
        0xbca95ded600d6c46, 0xb403207d671f4e7f, 0xde602dbacc7d39b6, 0x5db7dd710c065cfa,
        0x226cdcd36fc8c090, 0xfc0c04a0792848ad, 0x24b9aaa03594ae7d, 0x73397bb095a62172,
        0x3f7ed5f2cc14dbb1, 0x702108fc9efb199d, 0x825e01d6528a9239, 0xf887558f8e7da518,
        0xf506d720fda6c1b7, 0x75891359f02d0e7a, 0xdfcf0b7348b5a39f, 0x45c3d73edb67e44e,
        0x4d9b3f5fb0e37254, 0xbec79f15d4d9acf5, 0x64bcf06e99bae0f6, 0x2620157e78d648f0,
        0x8ba02fb727fe06ce, 0x1617b77ffea2d0cb, 0x0f09e7f1d82e2bc8, 0x88d343a7f2ae6c9f,
        0x624a8c9454f39b1c, 0xb0b14e4a822de823, 0xb5fd32d2745116e4, 0x9dc712e82f319e47,
        0x4cf4d8cd3861b80f, 0xd212c99361b41f7b, 0xcb61573b9dd142da, 0xe87fd5b55e145b32,
        0x164246c6fb27dce2, 0x0e5e1fa045f6eadf, 0x16d6ed5ae14cfd3b, 0xe3abed6ad3ddb945,
        0x5d1629e66099b6ce, 0x0cb58eee9d28ea30, 0xd36ddeb7bcd083bc, 0xa218b4afb3820def,
        0xc64cb4c341aff49a, 0x6198954b2b20c939, 0xe1208b2a710903a0, 0xbbbdb1abcb3c617a,
        0x860ccabe5d9253d6, 0x176ff37882b23226, 0xb777851ba6b727b9, 0x004483a8eed24b7b,
        0x6bea92c48373c6a4, 0xecae3e5ffa707140, 0x681350d94ac2c5c9, 0x19ff360fd6d72c0a,
        0x24464cede6948957, 0x4a3a2a59478d1ee3, 0xf5d26c88e3055004, 0x2dcd22c7e9e5f2b1,
        0x387a6016ef31dc9d, 0x1fc3895105bf08f8, 0x50463f385a78145e, 0x787c0ec30d2053a7,
        0xc9049d86642c570b, 0x019e6f382d53b069, 0xe8f815a91c1039ee, 0x9b2b5939c5f4c054,
        0x63916baaaf8d66d3, 0x8ebc1d1bd7413111, 0x0886e20a044e7deb, 0x3525e31050d459ea,
        0x852965b7ae7fbd0b, 0x2fc52bb8a07701b0, 0x0ccfa661c3c136a0, 0x9780683933a244b2,
        0xdc8f58f9d7d431c4, 0xf11db1f96c010f8a, 0xb60ba965ffd0f17c, 0xb8b9939c97836b57,
        0xc78c0e0bf99437bd, 0xdeb0f83b1c4da092, 0xf26c69de74097b2d, 0x440862a15cd83936,
        0x26e8409438841ab4, 0x0f10bd0f5eae2ff6, 0x49480a36035dcb4c, 0xfc71776240d2880f,
        0x2708804c3868fdd4, 0xf745473648ff989f, 0x1e6c512b5588a39d, 0x7cdb9003bc147c27,
        0x9c4d608ace9798d1, 0x11032354429d7c51, 0xdae17a1f2565abb0, 0xc4402eff536d98a2,
        0xcce669fdc1f5fa14, 0x4f594af9faf13305, 0xc094eefd126dd9bc, 0xeb20d1ba36b886af,
        0xe34ee8f6e6d95811, 0xc02033f32aab7523, 0x583aac2cfcf78465, 0xbb21b7646031a5ea,
        0x68587803cb534584, 0xb3d469b0becb7b4e, 0x1c180b52ddb54a24, 0xda6de958bfe8a8f8,
        0x0e231e63ea3e378e, 0x6672c94d8044d3ba, 0xecabc372d47dfd1c, 0x44954a8c1aef4706,
        0x2af702fdd16e8b69, 0x802d829d8dbbb2f3, 0x58953d6f63ff5264, 0x2816180a9f9d44f1,
        0x815f1a30a881f59a, 0x4bb05b16d275b463, 0x825e9ecb47dd3652, 0x1be1e8d7fb016131,
        0x463de507a43928e8, 0xb8e62912022640cd, 0x7f23a1493d7d6f5c, 0xf040a69c18aa3163,
        0x76744b231462ff61, 0x69b54ae4633c457f, 0xf2d3810d830817a9, 0x9447e9cbeecd5c0c,
        0x9424e8f925e6aa6a, 0x3d62c3c09b160894, 0x9f6db69862e86536, 0xb25779433ac1cdcc,
        0x049812022dc837a8, 0x1432d7feb4cfdf14, 0x6e30c75fe9ba917e, 0xad7abe5a8122941a,
        0x4cadd176b8bfe65f, 0xdfdced3df29c72cb, 0x5518964db7474319, 0x0ab3806cc3bec0d0,
        0x714f6dee82b5c63f, 0xf52b1e0f7eb6871b, 0xc00106b0b888384b, 0xf793e3b5c0a74cf3,
        0xa920b4d3cc9e2b09, 0x7b4279154feb2375, 0x37aa27ff3a7e3e90, 0x9f2b9a88ffce9a79,
        0xa7afd35d9a8ede27, 0x96c9eef17116a0c4, 0x2cc1a299e3cbae58, 0x2e0e293cbe105017,
        0x355eaf0c9ba83df4, 0x27357890b618bfa3, 0xb44e6694ce8eae85, 0xd740b19d69248562,
        0x81e1652ea4812277, 0xc1bb3327d572d20e, 0x4f39d3d71fec80c2, 0xca61e31037521e35,
        0xea2125091788f9da, 0xbc508bf205c01232, 0x5d42f1a5136bb4da, 0xca499055779b12bb,
        0x66cc601c3ec1fde9, 0x45ba916fedde75e1, 0x67210e6b67da2ae9, 0x6db3b68b8afc2a09,
        0x6ccfeddb8ce551d3, 0x811081b96f476e2c, 0xb84220f3c0961f32, 0xc2b3c7554ceabdfa,
        0x707cc0e3e08edace, 0x55e95fd3199b16dd, 0xd9daa7f45e94818f, 0xbc3ceea3ff6a6e47,
        0x7e46aadd74e525c0, 0xb902924fe0a4dc31, 0x5e111c22b65c70d2, 0x214add93062829a1,
        0x699c8642227cb8e2, 0x74bad373b02a5ac8, 0x420743f020713db6, 0xe2f27e91025b45e1,
        0x4e1844e7f8755845, 0x4689a4dd8572b8d7, 0x2fee54288758ccc0, 0x4f9a4b2976939874,
        0x2ad6395420cdd726, 0x2ad428c61a206c53, 0x1819261e39cc886a, 0x077f121c284773c0,
        0x84de7fe9e011cfec, 0xac7ad700adfc8f3b, 0x1ea6e7a666fe804d, 0x1ba2cd0d772c60dc,
        0xb501e5170d3ae79d, 0x9277666a65ad5d0e, 0x763961fc4a322ede, 0xc7aeba80122d92fa,
        0x4ccc11d1cfa2ac11, 0x677e3d845280c2e0, 0xf0b0427b2175c3dc, 0x4fc7a8592a72512d,
        0x6b28546676d2de93, 0xc49c0dc797c3ed9e, 0x6e24322f31751f74, 0xe191008a37684170,
        0x550965fef089b0e0, 0x24637c727c3a85c3, 0x0942447b83bbe3df, 0x6329906976cc6265,
        0x4e8bcdb814835fa9, 0x30add2cc0cb6f595, 0x849f8633b5480cb2, 0xb320f214854116f4,
        0x014089babe43993a, 0xf08c70aca7181331, 0x107336e2f392a4c7, 0x7f3c48bb464b3b60,
        0xa2cf7509f58b7db8, 0xff4738116a9c189e, 0xb4a19cc2290c2f4b, 0xfed39621c3196672,
        0x32953613f3ccf239, 0x7683353639ff08a5, 0x75693952db2f3449, 0x6f290ff20be39fb7,
        0x056b319480ffdd56, 0xf43919bd75c68e52, 0x0b024e70cfee511d, 0x1aac2f0881306b71,
        0x7ef98b72f85123a8, 0x264da3aa59c78fab, 0xa71103fbfe3ae670, 0xd35346918d73edcb,
        0x18918dd25410779f, 0xa84841354185999a, 0x1302ac8f5dc99882, 0x6140f4210ded1275,
        0xd9958a44af59f48f, 0x1f1a9ec75fe522f2, 0xaae73c5bd3a5143f, 0x262a0bef225e847c,
        0x515d1e2b25a2b9d0, 0x7232875a520344ee, 0x95db7427d1b082e5, 0x25bec26605259bf1,
        0xc9c710915447e61c, 0x6281ddfe8f79da63, 0xb08c91b7e1b80dfa, 0x58e5947f15e24d44,
        0x9cff7e860e7803da, 0xd67256878b09b3f9, 0x697de51d8415699b, 0x496427e4815829a1,
        0xf273f9561e8c83b0, 0x41cc0cc30042fce6, 0x652acc41261aea16, 0x1fa52c43d7a9bd1c,
        0x99ff7864b4edb859, 0xbd5ae578a928e194, 0x6df4a3cb2324bb92, 0x066c3765efcc1c24,
        0x8abf7420800319ab, 0x2dda1451e98cbec5, 0x08db4cfc966b7bad, 0x964749390a4228b9,
        0x3c2f5d8fc39dd98c, 0x18846f9577220a50, 0xfe4d074c1821d05a, 0x7708823b05cb453c,
        0xf98134920109d910, 0xbbfabf863f214ac3, 0xe779fe209ab378aa, 0xf596a67f7a8830f5,
        0x85d04ddc79493e39, 0x0c70b548943efe90, 0x1d8fa56d5607d83e, 0x5e4fa7002d5cd4ec,
        0xc8b59eda469cccd6, 0x33b6cfe5b8bc036d, 0x2619b284dbcd7b43, 0xfc4cd7e9c91d92c1,
        0xef2cd193745e450e, 0x7cf2354e9c7b3b83, 0x1a1b049e0b6e5ae0, 0x29e7743fff17e8a7,
        0x1048d09250027f3b, 0xa1cf70bdb837741a, 0x98017cd65c16795e, 0x33ad6fe0f4a128ce,
        0xff0098689626aa21, 0x00e7c07684892e6a, 0xf27e122c13839a4f, 0x882c3371852eb6f5,
        0x19af4771f9711dcd, 0xd6e5813d3cd73147, 0x6a14d31946902477, 0x453b8e630ce17182,
        0xcdd576902eef6bb3, 0x5e8709c8fe36e449, 0x7b4c6b15c44d37be, 0xbb4b4c044dabe95f,
        0xd8ca872f8e7de482, 0xbcd95d854da7c04a, 0x2daa2bfc85ef5dc0, 0x4bb1b1ce5d6c53c4,
        0xcb5f1c6c1787b3e5, 0x32cef98c65059d8f, 0xa0e1117f1affa57d, 0xd7b8b4e7e51cc67e,
        0x1798f394599d4bd7, 0x788bf9aa212a153c, 0xf2bcc903ea0c0a53, 0x9b47a945b0c2ef6f,
        0xaf5b8b4afd124ed3, 0x552d4d0e0bc619c9, 0x688a874e5cab106e, 0x4b11978694def08b,
        0x98960835a47a40a6, 0x0228ae7521cf742c, 0xde28e5d8f9df596b, 0x2efd4f4a60444f34,
        0x5099edeeaf4ec081, 0x2f6c10d5b64962fb, 0x9fe823238f2ac967, 0xa6d767ca8ffd71b1,
        0x24ab82cb88bb3ef1, 0xba28b181aec26be2, 0x6f61428a5e888ad1, 0x8e5d79a84de4b4a5,
        0x9bba0075ea3760a2, 0xdb2273bc97afddcb, 0xf2493c73bf072932, 0xec221d40361beb2c,
        0xd2496f208c9d5d83, 0xe8765740ae22fbfa, 0xad18ad2391e2264f, 0x7051c8428d1d8284,
        0xbfa8fa79df8f65ae, 0x2ce8026f0a05f4a8, 0xcc3f0eeecea9f22b, 0x83fa0a23dffc1c55,
        0x77c94507b893a5a7, 0x75ed10f97163f883, 0x7b7ec516b7f476a5, 0x8172af80d7420ac9,
        0x48ee84319d9da493, 0x29681ff67662df92, 0x41be6e926a823b6b, 0x47eca488412a7c49,
        0xe807b39d4270fbcb, 0xba8e6616aaf7bd2a, 0x9e4015302afb67db, 0xf09e2a409b31da81,
        0xc3e4982c2d931092, 0x259f848870dfeb08, 0xfa5356c9b79dfa97, 0xadfe0c1ad98e9b6f,
        0x8f67858bfd80e4dd, 0xce9e34a4e905362c, 0x516701d2778b8eee, 0x6507a5b001654263,
        0x4c54d7d8ff758569, 0x47470e2e91401957, 0x0bcf6d4c72d19e0d, 0xc55e87da7135e813,
        0xc2270c14cf7d007d, 0x3a3a2e63b1543c0c, 0x5e7258d2ea13ded3, 0xd02f829a91d06e53,
        0xc9a10260104dddc6, 0x68e0fdb654e1b11d, 0x62c87b5ef940f325, 0x3a839aa5ab80a20e,
        0x758f76301e072c64, 0xb67e18f5b3438da6, 0xcdf2eae004e684ff, 0xc4a15b7df630e92c,
        0x466dbbbd050c1149, 0x0e88b3133113c689, 0xde48f3bbcb8692ec, 0x9e7b29e69c15a778,
        0xd91a20f10a13c27b, 0x56a1152af4c9a1a9, 0x18f453c11553a545, 0x7d188c052bdcfc9d,
        0x89574889964f4052, 0xe3d756c02e794187, 0x3c372afe2345372a, 0x4a75fab59cc16dbc,
        0x4d3db003524c0ce1, 0x166947175ddea39b, 0xfaa9617657b52d37, 0x5a60d1b005d62667,
        0x75e0389a2411742e, 0x5b9a16d6cc469f75, 0xa797e20821089f21, 0x0e5a6cceeb1b68f4,
        0x751b69003e3e661f, 0x3a09fab05f14045a, 0xe1dad926aaabd6d1, 0xa00d05a83e5561fc,
        0xe31d759ada6c7c62, 0xaa3da153b7c53c00, 0x7d5ece291a23f3da, 0x18fcb8d2c9a9ca15,
        0x0dffd39b8e517fd5, 0x979875fc47d1cbbd, 0x0de74ef343081af2, 0x66907b77b9a50be9,
        0x7b471698b8ce96fd, 0x0929622751c297d1, 0x35648873969649ce, 0xf011451333a2a6da,
    ],
    [
        0x5675a12ae6880b5f, 0xd959f317635abcf0, 0x565acf931ca260ef, 0xa8bf21726ddc3d83,
        0xad2e235b03264871, 0x08b966caa8198235, 0x1d24bdbc293cd945, 0x9a4b9b92167cdd1f,
        0x88a9173d371d0ec5, 0x329d9a81758bdc9d, 0x1a8dfe333baf6fa3, 0x865e07611b8c82e2,
        0xa8a506785264b33d, 0xe8db6fee55018577, 0x440d1eae57d6c1ae, 0xecb8f92d0cf4efe5,
        0x003847273dc0d12e, 0xea1daad9d5327f05, 0xbf3b70305253f8fc, 0x20bfbd77642c467a,
        0xf8516b9e0e7c7b6c, 0xfbee2ea2589b71a7, 0x57eab82f5c282027, 0xa8ca0be24c4b12c5,
        0xeaa82320a8dd6d76, 0xe263b23a5c76029a, 0x80899c8c4464f342, 0xc480938fc83f86c4,
        0x578477bd15eaa686, 0xe2264eb150cd30f0, 0x07be716fa3536baf, 0x81125450677b7a8f,
        0xe2c998a1db03273e, 0xb18b586a3f4e322c, 0x568c56fcd3463522, 0x55b77ef4418acd7b,
        0x7b2af70c4fc636b5, 0xc2ea321d44aee005, 0x9236fdf1ae1eed5d, 0xb0a31a1c855512cf,
        0xa7fb9a4f932ccbf0, 0xb6cb6accde2bf8a2, 0xe5e5de2786f21d2c, 0xde4873646fecb64c,
        0x40b2df4953cc5341, 0xb54b7388dd6d852d, 0xcb02ce9b28603026, 0xb559e34d674d10cf,
        0xbe64bb2277b5d475, 0x6771a29de6e8135e, 0xa81066307fc514ed, 0x0851631f7fd52a3d,
        0xf0743ce708242246, 0x92fec7c47a02aa32, 0xa3e1d52d86cde794, 0x91973d4d4aa359d7,
        0xdd974d6609d16ce3, 0x3c4080fd1695cb70, 0x54c4306d1ccfb3fd, 0xdd4a1a18cec38056,
        0x063aee258e110ed3, 0x4a21bc956fdf148b, 0xa04e06efbdffae5e, 0x26bc537af0c1bb4f,
        0x9ba1e92ce2606d25, 0xa516a43f99e17618, 0x7d6e797df1811d23, 0xf68deb6ed88207bb,
        0xb4c56243b8b933de, 0x355d098ced2d764a, 0x76985bcbea254e36, 0xa9118fc0f879b894,
        0x04ac4d0d08c0227a, 0xebbaadd97d867b66, 0x926ccce7da53714f, 0xcf11bcb9a659f2ab,
        0x8cfae763ab1c9e26, 0xf71256b691955960, 0x092abdefa957dc67, 0x88c47214960e2d22,
        0xaa95f450b01cc80f, 0xf1f45d949c88c17c, 0xe516fa69d913c01c, 0x3452bb12259d50c8,
        0x48750d82c203dac8, 0xdd6ee5bd5de7056c, 0x1620f5e6557344b3, 0x633292b628762d5d,
        0x7b2fb4aead36eb73, 0x856305324ac62973, 0x0f54c993084be305, 0x6479b8efe43bfcc6,
        0xd72fb935f2f58b50, 0xbb6fe952e215f8d7, 0x764d9f4e62e9c19a, 0xba889fcee69273d2,
        0xc34f544d33ec151b, 0x27b300663553a18b, 0xfa6bf3a6eb130aa5, 0x64ba62d347a77d32,
        0x242acfc8879e7640, 0xd68abd2c147ed658, 0x71936f567810e2be, 0x293a819ed71d4c4e,
        0xabb9c85e5f3d489f, 0x9b2ab1ca66a0f14e, 0x56b46a2de9e35ad5, 0xa8fda1fdd15fb62f,
        0xf3e90d4ca3c4bf2f, 0xf7554c5cf9ca5fdf, 0xfd3207aa3bd357fc, 0x6955bb699f962ec5,
        0x2c3d5ecb28308634, 0x988dfb2b6c698cec, 0xda798170de4b1614, 0x9881db71949ad4be,
        0x76fdd82c6d1a8439, 0x567fef7e5a6a7bb9, 0x72a258cbb3bdf344, 0x249f510cc8dd0582,
        0xe1bcc51359ae977a, 0xc10c28cc20f20318, 0xf10a54f146a30a37, 0xe6ef179375544998,
        0x1a87377c45963073, 0xea5cc30e0b7e6871, 0x36cac28ed4b636ee, 0x37f376ffd06b90f5,
        0xb012facbeb3b2125, 0xed90ccf2ce3bd99b, 0xe63c6920783e42c8, 0xa8eae2ebcd03bd7e,
        0xd9c2bdda91354c8e, 0xfac27f7ca3d63f3a, 0x3df2cb6a876fb485, 0xf6e73387c55479f5,
        0x002130119c7ec715, 0x0d7e6b19e6025f68, 0xda4feaed18ef6fe2, 0x1804bbeb7c868143,
        0x1e837dc3ff9b931a, 0xeb1c118e10abe8d8, 0x1065cbc674554b3f, 0xca9549ef6059f079,
        0x19be3106a6f8e927, 0xc5f3dee23f8ee0ab, 0x053afef4a105ba64, 0x0d3ba9c7ec7ffab2,
        0x89845d36a13d3083, 0xcf8a45418fd6b6de, 0x59e852e0460b3385, 0xc04983f2827c0d5e,
        0x24d7319197a7b040, 0x14ee0643ecb007ac, 0xfacecac3fbf84810, 0x8e6f2e2238cabad7,
        0xe9fdbc6fd3a64d22, 0xf3ce241197e3fe73, 0x15af34998eaf19f4, 0x4a40a859582c5990,
        0xae0456b1eb92d963, 0xbd31ea241ae4cd85, 0x16c1568b008dc0da, 0xaec1aa932d1f562e,
        0x88e89786b5e25c7b, 0x31152d60893db877, 0xa1ead7d56d9ff147, 0xc1ebc896cd6a900f,
        0xe7e4f956bdf26442, 0xcbfbc06883b2ba59, 0xfc4e861de2111e59, 0x97e2febe088de028,
        0x3f25c5ec20f02731, 0x864d1fbf51228a81, 0xb3807bddf296f5f2, 0x8bf1ab6c542af42d,
        0x936a2987cb999c46, 0x7818600f77812aa1, 0xde892efcc2c684fe, 0x4b2337dd88caf772,
        0x3627c89061079258, 0x35fd570ca3f97b5d, 0x2997cd5931b8614d, 0xef11ac877608be27,
        0x0e6201c7218464d6, 0xe9d7ed93ce1ffab9, 0x2d332a2974fd4925, 0xf58f69cf30583fb6,
        0x86944f595110634f, 0x90b4abb611713844, 0x08a06b2fc3a98127, 0x4d48d994be7c89cf,
        0x3c50fdfbc37b0099, 0x2fc6d460a9fb3290, 0xdc9dbce88dcb5158, 0x64c7f57e951f59a4,
        0x97d743ff6a73fc76, 0x3e553f6cd3edc140, 0x0176969fcd1f673d, 0xfadf82edc626d292,
        0x0d2b7c76d9d6b472, 0x50184374c53dce26, 0xeddaf090c3ca5cdd, 0x2fa89a0e453e36eb,
        0x76164be8796ac029, 0x984efc9fd45a8426, 0x67062382710566c7, 0xd0a3774a7016da7c,
        0x6d6e10aa0417ba8b, 0x706b777c75238a56, 0x91a1f36cc89c1e76, 0xbbdb54543560e541,
        0xb3db3cfa280a131a, 0xb47831dcb15e33b1, 0xc906e3dbf050816c, 0xcb6b867dc707ef03,
        0xc3ff64ae4001e02f, 0xf9e062977ca60905, 0xa65859368ae5244f, 0x48e57fdd31f8c6aa,
        0xa3e42674492dc89f, 0xe52e217937f19247, 0x987a7c4738ea0ace, 0x836638b3f48934c3,
        0xaab61ec49738857f, 0xe8f88f4aa64de69a, 0x9c4132ccfed70a87, 0x3468725b10dc5999,
        0x85576b1b16ec1bfd, 0x4807ac46281487b6, 0x32670ed8149a9b6d, 0xc727a6469b9e0a4b,
        0xd014848e38d17422, 0x336ab62c68447934, 0x7472ce5e6e37ca63, 0x4a769019ecdce095,
        0xd84f5b5a69065d9a, 0x721e1add9a80f90b, 0x7895918d23c2ea7e, 0x3f2f33fadfa61256,
        0x5a30ddfae26489ea, 0x04393c83fd98e1c1, 0xd5205bc105d64eff, 0x02da59de33ec7979,
        0x312f98f182b21983, 0x456bad8c4a4b0dfa, 0x31ce2ea48164b632, 0xce116714d940b1c7,
        0x057898119e35c7af, 0xb23976b34f9de9bd, 0x8d2fa9211438feb2, 0x12197860aa76bf2b,
        0x50659ae10ba76459, 0x3b7d734ff2001af9, 0x1ef0b57b290c5385, 0x511c21588d572003,
        0xc9ce461c9ce223e9, 0xb61ebe090cde4302, 0x1426dc7ac8e39022, 0x8badb223a1786d57,
        0xbed4109dce88013e, 0x64d72c7f11ff4334, 0x8b41cacb642133a7, 0xa03bb76156e80e6a,
        0xe678d53a5050bdff, 0x298cb00f3ed13916, 0xc39c2046bfe06d45, 0x42d69d8f2e17bad1,
        0x26a8bb2b1266db27, 0x4e1b323a00f2c6ed, 0xd327679d6d04ae2b, 0xd51c95f61d001cab,
        0x149f120c870e3491, 0xf7aee379f834c60b, 0x3375865c7e724e18, 0xab1d6e22d63ba04b,
        0x40045401fbf752e6, 0x126a21692064321e, 0xc031f8cf3eb398e8, 0xa7fc0d5bb9ac1124,
        0xd5d8715788799d94, 0x21b2fb2392f1f170, 0xb467c3c09a9f8d4a, 0x66dd6a77cfbbdcac,
        0x42410ffda8fb7d24, 0x9c7fc8c020c233c1, 0xb03740b84a1f0117, 0xe964e189f3596ba6,
        0x4fb6a34ef71d9c39, 0x8c946a97609c13bb, 0x3e983d09d497fdff, 0x422851b16ff0d478,
        0xb31c82531891e595, 0x58ebd15e65da04b5, 0x12772fddcb58ea59, 0x06124fc00018f29f,
        0xae37d855d3e9bff6, 0xd3a016a9f19719b8, 0xafab9a7127d2210e, 0x4cb6a33850a58ddb,
        0x156d350e129921be, 0x89d4e297ad0efa62, 0xdc0eb62f88feb3ba, 0x3214019573d1049e,
        0x8bfc782ec8eabf9c, 0xe448232e864ef146, 0x84df4eade1d59ba5, 0x2473c620afe840df,
        0xd87dceece9173891, 0x85a3f42ca677f090, 0xe495e9b70eba7545, 0xf34881f3fef20037,
        0xb1596f7a8b33a863, 0x9b1b81dd6d61a6f2, 0x46a9c6b5fbb41bd2, 0x717813e53bb686fc,
        0xa00e48ffde9eb40d, 0xfc616b89782b2020, 0x14e184b827154c46, 0xc26fbac1088dda1e,
        0xcb90bdd6eefbd8ac, 0x5a3b061ff908003b, 0xf3037f3430ebfe47, 0x2e7fda6071182790,
        0xa2428275f3b3bf4f, 0x48735aabbc62cb57, 0x31ea88f8373880e2, 0x59a783f9f27555d1,
        0x8f929d5765a5fcd5, 0x835fe31ef5d45b26, 0x1d9e889e0d7f549f, 0xe7fcea6fdc2ec741,
        0xfba4ab8354822255, 0x1759a7af331baae2, 0x11507b00b0340551, 0x2d744defa3feeec1,
        0x27380b41026dde94, 0x5c24dae613cfe17b, 0x4313214429327b2b, 0xdf6f11d37d24f015,
        0x0289f97b1432e856, 0xa21d2d226e517edd, 0x9c25b69b507ac07f, 0xa5ce085baab7dcaf,
        0x559142d093ceb95a, 0x31c4091846528ab2, 0x3e5f219cfd394895, 0xc7d9950b50ece329,
        0x08a37dfd52676ed7, 0x91c7e721b383b101, 0x5cd1164ffe098a9f, 0x2f417c0ede8b0754,
        0xaa9dbd8cd816ec44, 0xbf8cc55a0eebd9f0, 0xd7a0e542f0ebe6b0, 0x15da84298e7dddcc,
        0x14315dfeca5608a5, 0xf0f74fd4b2f9d1fd, 0xfce260b39df52ddb, 0x67bd8fed41b7730c,
        0x88fbae1dca5aeb09, 0x819a31bb0b5b9d6e, 0x1644a0a69ff6245a, 0x08df59d817028d36,
        0xe98787cc1b116922, 0x4e471a876dba9404, 0x024dfd84bdd75674, 0xf5089278dfd7f39b,
        0xb9995bb074c8c6e3, 0x9b70ecf4a465ab71, 0x65245ca189bb2ea7, 0x2965ebffa92ef1d0,
        0xad16cfe0d7a30e32, 0x35060bb822a68d53, 0xaad69130bc4403b5, 0x2622247298203f4e,
        0x8fa93aeb42bd8284, 0x7537d729f6318874, 0x87e98550d30c65fd, 0x9beeb1ae0f06c403,
        0x49235afafe5b118c, 0x68b3935cd8b0e02d, 0xa5dd344460910b3e, 0xc3d551897ad4934c,
        0xf657e5a4c631ea8e, 0xf51bb736f60f5787, 0x75aa6845f87d6395, 0x9dc90e369a5a9457,
        0x900d3560011e761c, 0xcf064294eba21082, 0xccf1ff85b3b1463f, 0x027d63b63d087e43,
        0x0793920b1dc3e712, 0x373a9c49f5a7fb7a, 0x209ace738d537d0a, 0xe7f19b45379ceb37,
        0x7a5adcfd38524458, 0xf15871892e00ba6c, 0x2e571583a2f52d80, 0xb7c20cc20afedf2b,
        0x97d00840f29b04e6, 0x354c82e58091804b, 0x9cb2fc3b6f7bb24e, 0x7c4d61d2f3df15fa,
        0x41a9f3715fc1aa11, 0x1f8072be5ba5a30b, 0x652baf2b9cf7bdbe, 0xb85e8f1c1cfda998,
        0x798a453c59c3009a, 0x43b532423395cfd2, 0x39f0767a9bf85fa8, 0x2e31f2050747a937,
        0x4607c41bcb5d6125, 0x1163c472a7ac883f, 0xaf952cefc9d6fee5, 0xd883169fd5f93f1b,
        0xf6532e375efdf950, 0x446aa2e47a8892b9, 0x193a07e068b542ca, 0x38567920b8ac5238,
        0xb9d61b76b0c14fd9, 0x3d04aa65393c7d91, 0x3221f2fbccab1e97, 0xeeebf0f0c77be72e,
        0x1a8a740bf025feaa, 0x7b24be2b3e1c6c0b, 0xee498acb8dbef51f, 0xfe3a80ffb51722b7,
        0xba5f9b8239e77b13, 0x9a38158b1c1008b0, 0xe5bd38280a1e0496, 0xb42eb51cb4237be0,
        0x4f99c7ac391f5c5a, 0x31df0531b13cc704, 0x3de6ca3464edbf51, 0x2452854f6fcd9651,
        0xc404a1a6c9c7efaf, 0x1cea9d1153567530, 0x37f6389b45760d9b, 0x4c9e98ede9363154,
        0xf197c20246e11559, 0xb75022f420cee7ab, 0xfbcb2ca666cd9a20, 0xd83416ee2782dc86,
        0x81705008c425ee38, 0x54cf5b8c1cbb2de4, 0xd0008ac43c67a74b, 0x5233c17685dcaf7c,
        0x6584520b38a83ff6, 0x1717f6e9057efc2f, 0xbf792fd561f53539, 0x6eca838bf4b07e07,
        0x34925d7de24fd6c2, 0xc1f9e456bb8d96fd, 0x88fffa15aca74a27, 0x29f9ff3202fdeded,
        0x9a6a690f4b073699, 0x59ed7e2334d3d8a8, 0x6f182c880e31e1ce, 0x84f0bd8949bb35a0,
        0xa056c88244ee212c, 0xbd8a877ebb385d39, 0x673628f4e8578507, 0xbf16c5f171d144a5,
        0x21d5d7e34bf9eb19, 0x0dec2fdf102a577b, 0x20a6a16d6319e789, 0xd5269f7940b3288c,
        0xe5c1e5a58d464042, 0x24cca576c6a24b7d, 0x06fedc535ad91107, 0x8208df4227822503,
        0x546b6fab7d6c83a2, 0x4042138f6d14fb40, 0xd97cc55dd8ee6022, 0xc0f8a7e2a07acb8a,
        0x7db48af84001fa42, 0xbe1c3b3a9d3b0f1e, 0x4e86dcbb3c0ad28b, 0x0318fe4ed45bb389,
        0x7151dc4467109c55, 0x660c0a5565b98c31, 0x4909776b07c6ab4f, 0xfd29eb4a2e3344d8,
        0x5d5ad8a3734b6cab, 0xb46fb59a8e7e6a2c, 0xf8ff7e3757762484, 0x427fe6fe474d747a,
        0xc1a67821b9475ebb, 0x10834b4a013f6821, 0xd4c70da12e9604d3, 0xa3cc2fe2963c2383,
        0xee4d79f5044449a5, 0x3dfe81a795c47ec2, 0xb8b1cd8624c8f30c, 0xdf747f44874d0e57,
        0x67f4092b5270c4ad, 0x401ae0b316e48426, 0x115296e456bcebf9, 0x97092935bac2ed99,
        0x46e34671d6df357e, 0xf2cbc8dd8169fbce, 0x00f4d58db871b17d, 0xa806b3a603a8158d,
        0x356b9c81add27d86, 0x425fddbaaa430952, 0xc176530e91719670, 0x5fc89c01b5500ccc,
        0x3c01abc82d5f2f92, 0x42b0432aa7c0f7ac, 0x2649cba4efed9fd1, 0xec3a8a29a88b473d,
    ],
    [
        0xfd96667ab1f0c175, 0xa8d62bd34c58174d, 0x01dfda7be01c073d, 0xfa1a58faeda49f74,
        0xb06b71fce8bbda5b, 0xc0d22337e989963e, 0x29c8138bffee23fa, 0xcab02370734a1327,
        0x7fe7f1b9281615ba, 0xedf38dc441177a46, 0xbe66f5db8f049ef8, 0x658f4dea8910763e,
        0xffa8a64912401813, 0xff9635d081443d16, 0x810d5efd53348e4e, 0xbee2aca7614d9ff3,
        0x3ad52d72fbd7d35a, 0x0f38f09cab4f6bd9, 0x7fe6b6aac35e1020, 0xfeed0feb66ed96f9,
        0xbdbea4b4a5b099aa, 0x5bb96415ee4df6ce, 0x0848bf8ca3e38124, 0xdbba28741f25da8b,
        0xf666c625f1c6e97a, 0x8bb8c27601232d03, 0xc8b13e8c9719a6cd, 0x72a26c5f52bf29a5,
        0x8af6b819ecb50699, 0xcc3f76b66a05ab55, 0x2ba6910637fc19a3, 0xb5b383c6150b0fcd,
        0xc274c69532fe490a, 0x5cbe488394d3d60f, 0x9a6183c79c9b00cc, 0x9887e28fb6170a5f,
        0x534d510a23f232b8, 0x4f915e1ca5a1162e, 0x62fc1633a71a390a, 0xbcd02e8a8220dee8,
        0x01059b5f37affc96, 0x0e8b0e7e953df6fd, 0xfd9f7ed01afe465a, 0x6129f861e8bfd84d,
        0x3d55d2567dd7b05a, 0x7502146b38b99f23, 0x30a3a63486edc9b2, 0x721ca22c275bce43,
        0x9a369cb0b5c0ceb3, 0x7115ab5c61b3a72a, 0xc84cd28445be4c14, 0xfae6c0bf18ffaef0,
        0x43b858440531264e, 0xe834843f9bce2b39, 0x795e1a2172fa713e, 0x653335a0e7ce649c,
        0x568e5fb93958c20d, 0xce4ff56602bb383b, 0x84c9747822d5b667, 0xe556c3fcebbc623d,
        0xe7b5fb06bbaf9d5f, 0x6b1d4868e8822711, 0x2194ff5333f344f4, 0xb23d262021afa86f,
        0xa256a6112ab99e7d, 0x872251d3a900551f, 0x07a6bb65ff9e1234, 0xddb899570e4545a3,
        0x8de64d84a24b0a63, 0x2c4831ced3778d5a, 0xbff98230fb92e3b8, 0xa1df7afc1951afa8,
        0x419d1a5341d5aa0c, 0xd9a955bb7f039a7b, 0x0f5fd99ec38dd5ed, 0x6e5fcb48076a0f80,
        0xd61827625337c55d, 0x2342cbfaa6cc364b, 0xf9cd822a63c74225, 0xd1f13b2c358f245a,
        0x4117f50237a2a095, 0xec3037b4922dcac1, 0x57b63c9e140ac884, 0x1632632eecc3a8dc,
        0x8e8fe2847592587b, 0xd1e27bcfa3ae4cf3, 0xfe295fdf208fda8f, 0x14027f11097ba4a9,
        0xe89f84b2c73a277f, 0xd446c82efb371cf1, 0xb408e505619d5c33, 0xb513d669b6534592,
        0x4af769391c1d0af9, 0x2ab4b29e98091425, 0x522eba390b138296, 0xf948da80ed9b0f4c,
        0x42bcb4e16d8ebd70, 0x6eba464d91cbc054, 0x82ca07e33bf842b0, 0xf5b85d21f3c0c30c,
        0xdb66fec149c99708, 0xdd539c2137efa40c, 0x4be2868e2891c4c3, 0xbd4d1f2a705632fd,
        0xbe76c578ffee0a60, 0x38ea7cea62036a87, 0x832c69addbbaf852, 0x1df491d677e35a47,
        0xda6162430fed8362, 0x479ab73c21992e8f, 0x99c9cf1949c07c7f, 0xf058b8a7d24f78e8,
        0xc1d2d1ab28a2a633, 0xdd19f34b337194fc, 0xdee94092f8f4c719, 0x2e7b0ee385ed1ede,
        0x8d71805eee7aedca, 0x8de8e41da90cfc7d, 0x5ec1c1234be58266, 0x8b30baef6857eff7,
        0x1188cbe60484a92f, 0xcad561c6fd62813d, 0xb2fe94d16214f46d, 0x30a3242fb1b968fa,
        0xd49c2e17b02d3b20, 0x8857e28273d452b8, 0xb455b9febad16820, 0xea757f0386b11457,
        0xff07c1ea05e43f9d, 0x06f5862df12802c3, 0x2a4f7f18622cee4e, 0xd3576489c74c07e4,
        0xb73dc262b5d4603f, 0xd775c6a5ee8c4178, 0x14077ad58fa75007, 0x581cfbaf42638b8a,
        0xafc556dc9fb0917e, 0x4f1525814d8ae7c2, 0x1896d52b1b4ae7a7, 0x6a5447a4ab65f9b9,
        0xfce9d7ff3be902e3, 0x63b0a03225bf8438, 0x93d2e810a426bf44, 0x9e92d83fc46f62ab,
        0xed03d415d356b3b6, 0x706b201a08a1a51e, 0xc45c23fc33f19077, 0x904493631455c8ae,
        0x0226d38742000897, 0x9bf7ace3c7f1868e, 0x733792398913a1c4, 0xe429b3c734b8e4a2,
        0x2403d513746af4c0, 0xe5e8b639efa495f4, 0x8c1b831ba3158864, 0xb8ac15ad578195ea,
        0x5a7dbbbe99dddb1a, 0xbf373ad1b6478fc8, 0x751544c7fda58cf3, 0xcf075225ccd05413,
        0x69059e1e65d7a1d0, 0xf9c880d0021c38fa, 0xe7089191ee1f83d9, 0x30861cf8632af7a4,
        0xf1a6f3e76d54721b, 0x61a45c53789201c2, 0x6573fe492a0c3c23, 0x00119bfd22f8e30b,
        0x45d7291b75d6b83c, 0x57e01428655c3685, 0xcd888c2203713338, 0xefe0e9a9a84a82cb,
        0x24bd0fe8383e94fe, 0xf605370ad52c41d3, 0x9d8a50c25b0cd506, 0xd178eb57eed46b97,
        0x676190e3fcb48cd3, 0x0f23bfec8f0a14c3, 0xe8f223ef3cb73831, 0x3cebaa05125d1488,
        0x4ace3068fbe643ad, 0x398800edd81115b4, 0x5d8e87da1be14fc3, 0x7ea7c856f3288377,
        0x00ec14f44b0d29e3, 0x0927c34801dfc9a8, 0x834740f212cb20de, 0x842ce9b0bcd05a51,
        0x4d31052a2d933cc8, 0xad59adfdf08ed046, 0xfe69ea78610b4e4c, 0x0bc4d2d1b0148d30,
        0x305700bc7e1c9cd6, 0x5d93c48add925555, 0xdf4cead850f0a3a7, 0x64e4b39eb59b1008,
        0x5d5fa9641965a916, 0xe23916549d0c2894, 0x4d3a6e1088e61b81, 0x39db6d2b2130eaa6,
        0xab2a69f3616ce893, 0x063c9f834f848819, 0xf27c45c6480b1ebb, 0xd7d863d4a75bb0c5,
        0xb3b275d1ea0dd7a5, 0x6ccd3ce5a078d298, 0x95a47a97019d36b3, 0xc1dd32dd827d7374,
        0x135d5a8c15ca6087, 0x159113518ffff040, 0x468d2c36b71273c5, 0x8d7619d40aeada65,
        0xb678055136db5cd9, 0xe821aa8b82091dca, 0x59354b247e78564e, 0xd66a43e3056b4afc,
        0xe6858fdfb7101feb, 0x51a7b34a477e6493, 0x506b3c160b3d02bb, 0xd6ed33eac0785f88,
        0x97b0a3aa891ea41d, 0x8a1a9489178b5844, 0xaba6fe160ba33938, 0x3f31b12c4f62be64,
        0xf36dfe2f29fdd109, 0x6200faf121af4942, 0xc41ecde42d0cd2da, 0x2fb670adbb4ec123,
        0x8d37ab644480f858, 0x1bc2333de7890746, 0x182d0bd4de1589d0, 0x06c6e73e6eb97c32,
        0x212ff131e0b58129, 0xaedfee73c39d8a43, 0x4e1fe026e3306617, 0x972bc3bc6d949612,
        0xbc2b73346bfd0cd2, 0x358b746d3a60435f, 0x0ed9da5abbcb3d65, 0x4ad7d425259fdb5b,
        0x9af97ab3ee09c3b1, 0x1fe19eeca60485d3, 0x24382f8818c2361e, 0xcd0de0fe7c8b7fb8,
        0xc98d1cd25f7d46c1, 0x4d33f7c5ff2532da, 0x82cefc1e80283ad5, 0x1387b347e8572f5d,
        0x2b2e078e16a2796d, 0x0dde73fb00fb9a61, 0x336dc7a78aa69c94, 0x241a35ed0ad576ce,
        0x5346e0b407299aec, 0xdb755d65c1c47abe, 0x2957be968ab11fe8, 0x119b553588ce4170,
        0x3f1e25462b2887a3, 0xc39b67d5bd6006f8, 0x152b3c8e1b8c2903, 0x3b090340f66b546c,
        0xb48a40533bc98966, 0xf7d4fe865d0eb314, 0x218a867d3bcf733d, 0x4bbc805bda2f91a5,
        0xfb9a6eb1c0861e05, 0x54ea4526841e8783, 0xd88cff4c3fede5c1, 0x806c34a7e87e7916,
        0x342620f42cb48ac9, 0xf93bd10891292fd3, 0x1da421b9d5d1f840, 0x1636d593c3e566e7,
        0xfbaba41fef5dca2a, 0x239d7b6accf63d87, 0xeb6839d6fc305ac2, 0x2f2fa8989f630ee9,
        0xd8fe5eb1ca64f047, 0xf732e6bcd381b6c4, 0x042b752932dcafbc, 0x158644ad2ac351e6,
        0x1a42c51b84f1dcb7, 0xffba5466824f2b6e, 0xf23846bcbf11ff8d, 0x39e23dbfb9e33946,
        0x32b457e66e35ea4f, 0xb5295edf09daf4be, 0x48e085be94dac7d6, 0x23b21fc8368c17f6,
        0xacfea1ec0c4e6370, 0xd5b2b12d5f03e261, 0x0ce421b04d1feacd, 0x0668b84c3c425976,
        0x7fcfca6cb0f7f354, 0xeed38f50bbed8f77, 0x17c6a7805a7aa63d, 0xa26f0a6a35abff53,
        0x4acc5748aa5d46ed, 0xed7f65985fb27e0a, 0xa87adf8623521b97, 0x8d7795f53a766eca,
        0xf9497232321f7a70, 0xb2cbab945bc537b8, 0x6de1fb5e013f88ec, 0x669ed8531b515fe5,
        0x39323719f7e918f5, 0x1ca308c3a463dc9b, 0x205366d0be91c8dd, 0x59434d54464bc74a,
        0xd4888744f59b3acd, 0x5ae37fb2dcc59e2c, 0x820a385bdab7865e, 0x8a6b0352be10c0cf,
        0x48b8cffa20440444, 0xd859809ffce59f34, 0x8ca085a4939a33e6, 0x49ccaf3cbb4a793e,
        0x952a620579aa99ec, 0x2df8520b63275d49, 0x3efdee3c2ce14366, 0xaab5bb670aa9c8f6,
        0xdd782f49c772fd14, 0xea6f756bf96ccc67, 0x9e82e9995f2a89b3, 0x0e0f4013cdeb912f,
        0xaa8718636f564743, 0x42801b8f8b2290d3, 0x20ff6566665e37fc, 0x3dcb0a7ee569add8,
        0x0b74ae115eb02b8f, 0xe86a4119aa5f2b32, 0x57d902c9da27560b, 0x05391559cd961e88,
        0xc0369384a8b38a74, 0xc887a31b14073286, 0xe5b8a55fd6c46e3c, 0x81c2f4e704ccb02b,
        0x660e5cd0afb4787d, 0xeca37dc85187f595, 0xf6e310ff0183793a, 0xd78caf0c370db87c,
        0x6f21474bb77cf8cb, 0x5feda346dd01864f, 0x752173d3fa93c5c7, 0xff4aecd9164bc6cc,
        0xc57f12e08202bc04, 0xcc67ddadf0eaa6a9, 0xf0f043e816e0328a, 0xeadb2453f43e88eb,
        0xe2a21c2a9d77b900, 0x07fbb1194ed54766, 0x06c8701419f99faa, 0x423d5369400bc690,
        0x97e7f7227a935ff4, 0x1659a0acf3ea3e07, 0xe80a1395431c53f1, 0x55c21b4e02883af7,
        0x58c7ff5f95bfd318, 0xc1e93732178501a0, 0x9d84cfa812543191, 0x7d79a89f8564c37d,
        0x9fc557d99193931b, 0x524c3653946888e0, 0x673d3625f9fbb2a0, 0x6119383f12fcc6d4,
        0x37a4c2f66a3df54f, 0x1fd24431b99057d3, 0xc9356bff09086f8c, 0x9f14b8e576fa1b5e,
        0xc657cb57fd3cd554, 0x83e18dd05e1ae8be, 0x1e17b50c56024b95, 0x17472da2a03fd77b,
        0xcf662d6127288b99, 0xca27b62224015306, 0x11e32d62f3daf96c, 0x2a74e834037c97b9,
        0xd4b877a0661ab68d, 0x225bd9b681872a46, 0xd59c9ae975a94543, 0x6e6c7a7b4492a828,
        0xaab9bc32ecb34e97, 0xc3c712ec7f8a3249, 0x42043f9f01eddf9f, 0xdfc9693c88e05de2,
        0x9125f99638584057, 0x140e853e543014db, 0x0e6cfa7e68ce7a3c, 0xbb00b46c01e55cca,
        0x88b00822e76a6a3e, 0x73e9b332cdcefa78, 0xe39c0581da5cbf67, 0x724ab65ad721fa7d,
        0xccff0ad53b1e44fe, 0xb7529a3b19846dcf, 0x84aa7f0752d57deb, 0x5def2d8874fe6aeb,
        0x04b0ee6ac0695d3a, 0xeb1275bf9f62cd16, 0x2dd3a5e7c9244881, 0xb57782c6cd35b652,
        0xe0e66378a55e9ef0, 0x04ea79e4ad5a0ab3, 0xbca206e432da639d, 0x46fa0fc9c45898cf,
        0xab8fcae7ee45ae34, 0x0933b92cb6387846, 0x6ffd45909737135a, 0xbb5b0c87f6c615ee,
        0xf8326a93754df5ae, 0xcf0f8ce1fee19b24, 0x30b7b9cd65986a7a, 0x6d82fefa2746c34b,
        0xb18718d62ac991cf, 0x6e44367b7d0b9d8f, 0x33b9a8d61a587f89, 0x5335dd1edeac140e,
        0x83e7c7c3f8006bbd, 0x8008f18d836757a8, 0xae9b2018e6bfccf5, 0x0fad58b5f8698d29,
        0x3048e9af903f9d91, 0xfed5b1d1a8fb8623, 0xcdb22db7950c85c9, 0x0347bb171b207495,
        0x17568fcfda4eba9b, 0xd84a299be949b72f, 0xf29a14135d8f5b80, 0xa66d9836c95f0e21,
        0x7ba783bf4ddc49d6, 0xff2242a0b8510f3c, 0xa272e1ac2b8825d7, 0xfaba8d0c3da46b02,
        0x78a33d05a2a02d5c, 0x849eabdfd928c0e7, 0x3c3487da742cabd3, 0xab23d0422c1a9edc,
        0xf27045615bce2649, 0x51beca8911e8d6e6, 0xf022ade75835a989, 0xfe10bf59197b122e,
        0x1f352ab1c4b459fa, 0x2642add20314bb90, 0x83c97f983c47dd07, 0x72f4f5fcba53eb42,
        0xd539d7e458ffe9ae, 0x55f2a1085215ef57, 0xfb7998b193524f6c, 0x6cae7e57e3f1e9c3,
        0x19fd039616a02cf9, 0x2bdc5674e9de42c0, 0xebb34d900ca0464c, 0x55b61b3499ad0768,
        0x58c9e92eb38d9e0d, 0xc0d169d93e877fea, 0x4a6e1d7c8add8c4c, 0xa5152b95f88f8008,
        0x86dfe0e688824f53, 0x91356a0735689d70, 0x8da4c7c808bb6028, 0x8ac350b2f9226ca1,
        0x4d02558594c5394d, 0x0335bae361578b46, 0xd50f9cde70c1fd2f, 0xad88787e88210d42,
        0xf24513cf69939f56, 0xcdd81522e9520e8f, 0x8eb5cac18518e27e, 0xa509cc3e2d84244f,
        0x73eaf9eb1f19cd67, 0xbf1f1e83a0028029, 0x249712b00f983005, 0xc497d8eed7679b1b,
        0x3d3daf0481a46aef, 0x3430912783b3df41, 0x0951b10221b660cd, 0xe9172aa0cc542b54,
        0xc4416237740743cd, 0x6dc4d8f6edb96a10, 0xdae382ca3fd8d8fe, 0xe631c2499493ad61,
        0x87a8b84d78e6792c, 0xfb2f467b75a8f8e0, 0xdf9f86ad8b359c3b, 0xef21077068b671c5,
        0xe480bc0e75357af0, 0xa3be3e2cdc3e1148, 0xd03589e0119010c4, 0x1baf90e9b5c8253a,
        0x2cf3690ca0edc975, 0x76c1397ab0c61ea4, 0x6e9be0c4d3526501, 0x77a0aa0a684e434b,
        0x4d14231704408c76, 0x74b4965d0733bc53, 0x3ad83acbf2c5ba33, 0x759c2c95338f7652,
        0xda3b79df64ada03f, 0x2d131ff56bd3e7b3, 0xbe4513878bad494c, 0x5390625ed9cf4b37,
        0x33a8f3f9206ae654, 0x08c0b7e2a9693774, 0x2cbc255400242233, 0xd1ee174c1918aced,
        0x33accbe6c53aa54c, 0x82dc79580ae61eb8, 0x0985f73ee3177231, 0x0ca4ba533ea74dab,
        0x915993939d994472, 0x955e07a33ee2f149, 0x95ea64c0dfecf763, 0x2b1ceb546f6c3b9c,
    ],
    [
        0x12e335ca87636183, 0xc89fc5d00f01c7ce, 0x4ff11b0cc8df0a74, 0x5ce8a78a08b21362,
        0x1586cdff2ff27af2, 0x7641190e7298c7d9, 0xfe10d25aa6ebb83d, 0x29aaa4a89ce76a94,
        0xf1d6333f85c6a60b, 0x05e785fbaf72c239, 0xba39928316cd1be7, 0x04340d52390e35da,
        0x4d31c29d2faa9530, 0xefd1e3ba96f00090, 0x445acc561d5e580e, 0xb3e76e66528960b1,
        0xe12d66e295456622, 0x5b281b238a5cb63a, 0x0eb0f0de06a5a96d, 0x3d0ef0d3a3d89e15,
        0xe3433562a838792a, 0x595e0cc0345c8929, 0xaf322f23da60d581, 0x967dafb7b790881c,
        0x030b7e39d4231a1d, 0xe00d25f7f5484410, 0x9487e50f520166e9, 0x317c8e40347dfaef,
        0xea26d87d43247e19, 0xb547c662426bf202, 0x505e8fd9cc5eb43a, 0x963d87934d217a2e,
        0xd04ac53fa75c5a91, 0x15a381407651e4ff, 0x4ce3998be33705e7, 0x40911e50086949bc,
        0xd228a3baeaf7fafc, 0xca83d8ad3776503c, 0xd9444337d2051dd5, 0x884be61c460ed764,
        0xdfcd8273d6000825, 0xf8c5c72d069b4228, 0x742f3abdfb263d48, 0x75a83be116910648,
        0x0b0151bd58631468, 0x550f63925433abd8, 0xfcfd9bc75381bc98, 0x4d725c1d67a95e56,
        0x7d7f4770283c34c1, 0x2e6e6686397ed010, 0x9a9124eed84bfa55, 0x11901efcfbc0740a,
        0x2cc74b9c56b00ab5, 0x5acef24d431f0b8e, 0xd7712aa480a31eb9, 0x53eaaa1fc192bc29,
        0xef9e05e3e9591945, 0x2e0a4635702eb71a, 0xce197347f346ec2d, 0x598ce787b2869cac,
        0x99ef4da35e9d8db9, 0x2f3588fc8c3dce23, 0x263fd8620517b914, 0x8487eb9068755cf3,
        0x1461a65a719d1ca3, 0x6fc45ffd7283bdf0, 0x346ba520e095ea9a, 0xf37f5e7fd9fe0b36,
        0xee628535de26b5ef, 0x499c35ed716eda14, 0xc5e3edf8a834b30d, 0x847cd081c0725c97,
        0x982fee9d1d7ccfaa, 0x597e20168af42e92, 0x2a486323cfacf7ad, 0xc098e3d327a9947c,
        0x1d5783ae49d42f79, 0xd489943f3e0d25de, 0xbf6547efc43abe19, 0x445dc393d84aecb3,
        0x10469942ff554b13, 0xa15a27126dd136c2, 0x2c7a36721fcf91ae, 0x4d5a30c90d07f5eb,
        0x4aead02b54148e98, 0xfe43c73cde5e2498, 0x07deaa880681173f, 0x2002b8e43663e76c,
        0x1f72e8b1613d17d8, 0xb4984eeb2a922894, 0x6f6b115bc4ee6a95, 0x795b0f7d64464bf3,
        0x7e753390fba8368e, 0xec50423e66194a34, 0x612ab1d0daaf0621, 0x099e8c561fa4702d,
        0xcbe624213bf0524b, 0x6ba6c6174890cd7f, 0xf9a0661a48ba56e4, 0x39b3ab694064a19d,
        0x9324e71dee878f00, 0x2cf38b4e46e82d65, 0x6c34b236834cd72d, 0x388df47bb6041177,
        0xdacfcf119d440eb3, 0xc077d3941f2f6b02, 0xedb557dc53699a0c, 0x5b32e77d2e7d446c,
        0x570ef82c9f99bbe5, 0x4f35e11613ff0107, 0x8a42ddfd000a98ab, 0xc36d6e8b8e17af44,
        0x0148a4f02454a31c, 0xe444a5a92bef28cb, 0x6cf81f41254b3f04, 0x4994fc5fb6e35fca,
        0xf559a140db4bf3f4, 0x9f1c4a80d13cafef, 0xbf7376ca2d8b99d7, 0x09504e7a4123a9f2,
        0x92d20e07846441be, 0x65167c74ee924cd9, 0xe14818a8221db43d, 0xd2f777204798690a,
        0xa01f11d917b484bc, 0x9d42923168e0c237, 0x447624ad225499a7, 0x1887394e7fe12541,
        0x8150080ab14161d8, 0x71dece8181151923, 0x81dd2268cc2bc6c0, 0xdca66c7f2c87837c,
        0x58480040c682923e, 0x316134bfbb764e90, 0x546b5d5c683e09ff, 0x0c099e9097e16665,
        0x1c5e28e7d4634535, 0x663f5a72b32ae6c9, 0x00c15730277777ce, 0xe6d781989ecc7a3f,
        0xe588c224f618b3f3, 0x082c40ae30c8626f, 0xd160a81bc922d50f, 0x136184361612ad64,
        0xa894af86f7126c09, 0x00fab229169beae4, 0x287bf614630eca3a, 0xc359e31073e4887a,
        0x809f2bafdb66f216, 0x0cdefc98503f216d, 0x86b97444a78feca0, 0x3bd28edef8e82490,
        0xcd42351201857d37, 0x498102fd8e1e09ce, 0xaf29926fcf7560f8, 0x15dc99d61364ec20,
        0xb35e75cb3c7bcfc6, 0x11d3486578161e84, 0xde170783e6672368, 0x6d91bc47e6431f1b,
        0x91dcb3ceb8792826, 0xa527b8d25fe253ca, 0x47f06b30d9e4e184, 0x538c6d966b07eaa7,
        0xa853bfc1e413c1ce, 0x65af46e6adf3a8d1, 0x8478321658df3f28, 0x2708976360b29b0b,
        0xa82578347738fa46, 0x0032dfb976393a52, 0xc692a4747ecd0f61, 0x8e0534e5a86ba2de,
        0x03565f47b30f7b96, 0xbb2b0fabe731a37b, 0xd6091ca6b49463c4, 0x38ffb699313454c1,
        0xdcbb138aeab3b646, 0x1ab9d6164073cbe4, 0x7c9b7c3ea1051109, 0x4dc09eba177de7dd,
        0x283136d4b8a4b54e, 0xf19ac70b4659f447, 0xc1166cdc2b8e5f7b, 0xe897397f90671997,
        0x28cc70ef1d897ad1, 0xe16b351510ccabb5, 0x1bf37115c935c025, 0x2689e0f39cb6015a,
        0xc2283fbf1767f6ca, 0x6375607686fa61d2, 0xfbb831bb71f807d9, 0x2e4c65d446af8ca8,
        0x08da4ebfc612e112, 0xed1cb14cc433fcc9, 0x2fb2e99fc2701468, 0x92524b940bf2e993,
        0x4dd4596b5e37da30, 0x4d23467e884fc34e, 0x02f96218c6dc44c6, 0xe409ffc98f7b1fc4,
        0xa76e1d2794fec469, 0x3040ff1345541cc6, 0x5d2f200fd49a254c, 0x2c39102e23aa6df6,
        0x7d8a6f90f8f5b65d, 0xf6e5b5efa4f428e0, 0x3877c7f8f68eed4e, 0x3ccbeccc8c831e37,
        0x448f3267f581d3f5, 0x400d3f37de31b4a1, 0x65347473f60c9d2d, 0x2f4c6b7edbdec349,
        0x09cc90ffeabfe5da, 0x8e4e170df98826fb, 0x64d336eac633a54d, 0x44dd2e814bb2a47a,
        0x9ecd682c0b4b7926, 0x8f8c9fcbe1d731bf, 0x20a324581f989e46, 0xc07fce2891600d3f,
        0xf78cb5ce7e44aab3, 0x83508c0664f04dec, 0xfee7df4483788673, 0x3fd21287a5f61399,
        0x28a6bf887885092a, 0x945277b8ff3d603b, 0xda465f75f9f8f6df, 0x38c05b47d3723bde,
        0xfe916368dcf17d1c, 0x4f09a4ab1d31056d, 0x59b8808e2e921372, 0xd66d7d53e502ba08,
        0x7db548af76281df3, 0x5e52c880706c3572, 0xdc64f583058f0d17, 0xc8a92eacb692aeee,
        0x000628e098c04b24, 0x1e8a5a08c83d6e74, 0xf37f6b9f9754ce07, 0x22c3da8c991e4eaa,
        0x7834bdb9f101223e, 0x24c6b9e018f0b7dd, 0x71c3d6d6640e8df2, 0xedfdd25c0494bebf,
        0xe969e4f837032aa2, 0x82bab6b610f561ae, 0x562bf290f1a48c9b, 0xc56185d24294fda2,
        0xee962e740bac861f, 0x63cf15c410ea5907, 0xb22bdb03fee14ce0, 0x8831ddeb7127b0e8,
        0xbb5244799e77f389, 0x1d89c6b8729bc192, 0x9514fe382fe2e021, 0x72aae645b9e119dc,
        0xc95dfb6ba8498a9a, 0x4279612bd3959bcf, 0x0d21336198053f0e, 0xfc0f020c71745788,
        0x247b9fd72f64225f, 0xfd1208a9f1d13484, 0x64528c55c0edfc04, 0xc0575b80690941ed,
        0x1fe944d6afe377ec, 0x6140081fdeca6b32, 0xf38a1f3bdb68078d, 0xb83fed0d300f3cb1,
        0xa802a3d262d09174, 0x660414a338a7f623, 0x395745eaf8a9f64a, 0x0fb0bd416121383c,
        0xb5512926a2b5e758, 0x275877a4f8545cb0, 0xed15a229906efa7f, 0xc5a1d3e9ba142643,
        0x69eb235a63e8edad, 0x1492247db6c79b1c, 0x10dd4b1f2a426cbf, 0xde750dfedbc3f2f8,
        0xfe4ac1c38ec44636, 0xdb8976690b4983b7, 0x165a2232d3bd2473, 0x9825338bc8bebbda,
        0x4a3534e9a98d7104, 0xd1c72976f7732345, 0x364d6885d119271d, 0x2fc90bae682fa08b,
        0x24798e5964c1e218, 0x1079615575392f01, 0xb05acbbec0ad3e20, 0x1e669308080d2a64,
        0x8611383a2546154b, 0xdba27b42cacc81d5, 0x3b26824955835302, 0xadec85ca5acbfaf4,
        0x71dd19f63e0b052c, 0x4a9d6e9de003750f, 0x68a9ce753227d3ed, 0x3cf686ebf663150f,
        0xd34a90aed6ccdb2b, 0xf617e177c6565e23, 0xe1543897fa399fda, 0xfa36ee150bb72dc0,
        0x49de6cc3965baa81, 0x456482b6c2a93055, 0x5657115762f6af2f, 0xc4821ed90cbaeb8b,
        0x5635fb66d85beed3, 0x1268e7f3bbc879a7, 0xa6e7223831c38c75, 0xb531f2789819b185,
        0x9b7a4236bed368e4, 0x59dacdc6616f5290, 0x893c5efaf0e3dfd6, 0x44db087b5c4fd58c,
        0xc4ea3c6610149726, 0x85e098d200d3ffd1, 0x881e876352418e9a, 0x958e00941ec6ad73,
        0x099cf91dba0f8dba, 0xe163880b35b5732f, 0xe0b8280df7ae879a, 0x6018de463cbfbf4c,
        0xdcc6de5f51ca2121, 0x089d9605cd298a74, 0xb5a44a2cb0fc3058, 0x8e25100a92c0ee9d,
        0xbd579a252f68ae6b, 0xcdaccaf7c735001b, 0x595dea3f33604a36, 0xc0b1e356dcfbe054,
        0x4f1a93d9bddd1cb7, 0xcd4e68de23eefed8, 0x9085b253603350f6, 0x316164a380d895a3,
        0x08f0298843fddd90, 0xb396a51336df0277, 0xe7be6381d549b5b3, 0x8f4fd58e11c794b6,
        0x64f7acb5a7f95997, 0xf8e24b38ef0532aa, 0x08d97c157af59869, 0xd9b6e9126e2eec70,
        0x4a030cbf9aacc091, 0x7a7767f97b2468f5, 0x93d841ffe9fecdf8, 0x5e5e89f6a8547c03,
        0x2b83ea6c6f5852ea, 0xd624bacd18e77e0a, 0xdd70bae8e1b0cea2, 0x51699c85c1ca371c,
        0x18e848dc3fec97dc, 0xcac8f7132bd9619d, 0xec8776a492bc2c13, 0x6b44dbe52a77601f,
        0xdbdf225de715b375, 0xb6caa0ca5d6e1bdd, 0x3299cbe09f4863f1, 0xfbacf9b7470c9519,
        0x811feef2d876613f, 0x3d54814d6147cee7, 0xfd0b03204601d083, 0x840eaade01962baf,
        0x1a584858a99a761c, 0x8e370e5a76da0795, 0x7b029ead8810063c, 0x356bbf744fd01d32,
        0x5462f15e15471215, 0x0f89129fefbe8715, 0x2ec61a3fe1bc9ae8, 0xa9ef7a4866788fbd,
        0x32bc4fdda72a54bb, 0x7e7d714179c37165, 0x51a9a100b5f42def, 0x390155ffe9dda4cc,
        0xe65ac22ae49b9720, 0x19eb409b8e372a43, 0x8fe9d56cb1f95e1e, 0x04a0c68ecda33285,
        0x4b71d64482ec5f64, 0x5bf292c2de6f9109, 0x268e4655f1d9b43b, 0x84a7eec48ce4573e,
        0x12d2ae144fb4f497, 0x35414ca771d0a1ca, 0xd92b7a75952560f7, 0xa8446691ac3de1c8,
        0x99fb41ac86e7ab9a, 0xb398c85a73c4346a, 0x9f09b116ceeff21c, 0x71662d279b75837d,
        0x10eabb93ab6b515e, 0x62de5066daef0e68, 0x14749d8c904b60b2, 0x3da2224c20cf45a8,
        0xe08e1d3c35a5c1dc, 0x6dcadc62fc14e750, 0x2a4c71f18b1df366, 0xc3d34153233f2f1e,
        0x5f4370358ba319e6, 0xf9896978838ced07, 0x23f329722ce9141b, 0xcad091d11810c63d,
        0xe999ea18fae20f25, 0x9f349d51044bc458, 0xb8cc814b2d7fe97e, 0xe8400e2f1e4c4d2f,
        0x12bb252e0b133f54, 0x1a2f9fe872f4d5f4, 0x71d63fa7bf9978c0, 0x3c50032f1a040b84,
        0x11337fff68dced7c, 0x71344b75ba79bdd9, 0xb4b873ad5832adba, 0x16f29d74831c428f,
        0x935e0f509da457b7, 0x71a87ecadebb8e28, 0xbb3971b7240a908b, 0x35579681e7c6ce9a,
        0x874d70a68dbb0651, 0x1086e441f7198b26, 0x616e3cdd4c4e213a, 0x5d18b7f6dbcda5b2,
        0x7536e854f9c3155c, 0x09ed7f7723b655fa, 0x7167b3309c2cee38, 0x3e06154fa264d877,
        0xa640ddca65e29f1b, 0xa5631e0203936a55, 0xa98a46bdec5a5b52, 0x9ff71a303c7939a3,
        0xd77e7a5681d17760, 0xb50818c362e5f6f2, 0x20caa2ff2fcc848b, 0x5b7a7ca5d65efbc2,
        0xc1e5ee2b4c386a49, 0x491f049d597e313f, 0xa0931d81a100b75f, 0x1258a5d914d26bf9,
        0x851f003222c1bd82, 0x5c879337e3c36beb, 0x6ee580e5407e4db0, 0xe55f00d7e1a4c364,
        0x0fe49d52642944c7, 0xb20dc9943e7b8f23, 0xf917044a1f780af9, 0x3d6d00d4f9254b96,
        0xfa3a28b033cb7306, 0xe8b9e6512c1e47f3, 0x8d17dfad9723b62e, 0xb194d4195de5ae41,
        0x54c782a0952b413a, 0x50064076f37f13de, 0x077bcd676b0fbbcd, 0x6eeb9e97e56bb22b,
        0xa17b5f6c31b4e4b8, 0x056e9021d837df99, 0xe70c96d8246348ff, 0x5be55df72f30deda,
        0x856b2323f9d2958e, 0xcb78b3bcbeae89b6, 0x49b9e818abe332dc, 0x2905906fe0d92225,
        0xd254188e865b37e7, 0x86e68167715cea8d, 0x9618d9a1fcf823f8, 0x5b616239f0bfa76c,
        0xcd7ff2083c4966b3, 0x2ef04ead1002d315, 0x7eacd2e13bfb60fe, 0xd332569723217be2,
        0xbf90ea5df970d266, 0x10e95aa9a6169daa, 0x381bcf34e7de184b, 0xcea7544f2b3a533d,
        0xcca0f2c6d1a2a294, 0xe4bfe0858d6c1474, 0xad3ecc188c683749, 0x0ecefb669fa2b504,
        0x46b67ab7b8f497a6, 0xe8e6179e52ab1792, 0x80a14367bbd0cecc, 0xd2950b0ea16afa75,
        0x84e588959ed56391, 0x15dfe6cbac572f9b, 0xa3c848688c824317, 0x7615c0360f228ed5,
        0x3e5949734c8c1220, 0x14fff651f1988361, 0xef658993710e350d, 0xbbd0413724630300,
        0xffb672f9728d3208, 0xe576bee9d41293ad, 0xdd162811d50cc504, 0xa0ad2fb5691786e9,
        0xa08c5ad953f00de3, 0x1d74a1ca3d63c663, 0x71e30dacdc5c297e, 0xe18feb42a9cb1fc6,
        0x979fd877795a0b08, 0x6ca7e73eecc98736, 0x7022479d967830be, 0x47d8f5ae7e5f13a1,
        0x771573ec1e75ab15, 0x5841e7e20555fa1e, 0x0292bfc49fb33911, 0xb3a2ea9ab6393b21,
        0x69fef6895a17a7bd, 0xcbe51bad87c6eb54, 0x3727b2d93d758ba5, 0x4ef44f588e421732,
    ],
    [
        0xf59de0f87d3ad2ac, 0x679a648302887281, 0xb80d38dcba75aba9, 0x0398381d11476dde,
        0x25dd9f4148f6934a, 0xcdca4b1e55c1759b, 0xd971fbd2a3520c27, 0xbfe5c43b153adbf7,
        0x2fb2c15be041d453, 0x522a6925876db0fd, 0x7a5aefad798b5051, 0xb19de6f12983bd4d,
        0xe03ca0850c52fcf9, 0xe5effb4e5b11d6c0, 0x7eca9f09111d0eb8, 0x0dbaf1c99ce0fcd6,
        0x1feecd2c4514b8bd, 0xc8ded766cedd2cc1, 0x318927444e45dcbd, 0x22b639f9124eb248,
        0xe8d241f5b5b4c4fe, 0xab3a4b0d0ca6cec0, 0x802c34099714de1a, 0xdb456c1ab9ac4754,
        0xda9f1c150d76e6d5, 0xaaebde75c910b521, 0x09ab4dd7fba59bbe, 0x5d3ece2e493d76c2,
        0xa6e0c2b21b3348b4, 0x384f37f4f71e84d4, 0xef6094c74fcf8743, 0xb5deb892313de667,
        0x07bb6fff62914938, 0x2cc2c1a593d34156, 0x17d8d2fba519d028, 0x893aa225a16647cd,
        0x0c36da0898bae4a8, 0xa95c9ea04604d71f, 0xecae282d44e40138, 0x205ee262502e26d1,
        0x527e3a9ffb4e1aae, 0x42874e9cfc4dfaa8, 0x4f4530ba3b77893e, 0x4b7dea31183e26f4,
        0x2b7690e45db7014e, 0xd4e31672ac493266, 0xfc68da688cc9d957, 0x2bded3a83016e513,
        0xd09f454bd94b6fe7, 0x1a23c3f6df59f061, 0x49cddbc9f808f044, 0x195461da9328a676,
        0x9fae0be1e9ff8421, 0xd7a726c92ac2e99d, 0xe5e47c553138acbc, 0x1764115e55a0c931,
        0xf692e17b8da7ca79, 0x53532223deec2329, 0x4973c726c870713a, 0x685d217242c98a56,
        0x2bad638fa6731b1b, 0x27ece6115d6abff7, 0x3a3a78c5160700e0, 0xd44550f8849e6d32,
        0xd2670cb1c0f92c5c, 0x13f3d39b7f9de66f, 0xe9b61ac6d150f881, 0x4959204d1ea0923f,
        0x8d1919883e38e31f, 0x3d46ee3ba6819d39, 0x2204fe54e05e1b9d, 0x07a66edf80351fec,
        0x2b847efa86c18ef0, 0xc5401ca17a9a4211, 0xbd7ebc8842a0d4cd, 0xb990931e1e3a28b3,
        0xa795382e0865ced4, 0xba30f74701c8374c, 0xda7eb0238f243481, 0x732ea65e3232a847,
        0x57cb78b4434b9233, 0xa3e48e9d6447b925, 0x3b2979cbb51b7f91, 0xed097f74125f8c22,
        0xda89eac1b75f54f8, 0xcb23537467246ec3, 0xc62d66d0de5bacba, 0xf497e6e94d3f305a,
        0x4bd38afcb7abad72, 0xc803ded4a7d5dd9c, 0x83204fee04f4609e, 0xa425f3aed804954a,
        0x9e361f42c414464e, 0x57de947359d6481a, 0x7dc4221805fab119, 0x75c872d766a478a8,
        0xd385285b19f44438, 0x22beffb161fe4572, 0x27b6beb2be00e7e0, 0xcffb728e64ce0455,
        0x9f88d799b5feb202, 0x01aa3fea415f8028, 0x8732df2387605748, 0xb961ef9c3294e240,
        0xc18c1cfd4c0b0f4c, 0xcbf894627084b2cb, 0x4c234f5469a18bd9, 0x59d6ff20c9fd2e70,
        0x1bbc9c36d7766bfb, 0x1c779fe2ecdafb85, 0x7e5e6b6583815670, 0xa3c508affb0f7bfb,
        0xa776a63323006b62, 0x87a6c14180c4efb7, 0x9463769295094ead, 0xefcc93e521766180,
        0x4254f89d967e13a6, 0xf44b4731cd62e7cc, 0x595cf1e240d7f3db, 0x34ea18b9a5c920a4,
        0x4827aaa2718691b9, 0x6a740238346eea96, 0x298465eeba54b13f, 0x350fbab83969dd9a,
        0x1c7b4b13b7355979, 0xa706d42d640c9ab8, 0xbd7ae60a961e4af8, 0xe7bc29d4fe16485e,
        0x8f05944ac900b6a5, 0x289c3c50f1a7dee2, 0x9f56af52ca7b47c5, 0xd67427ad017745bd,
        0x3554884432899837, 0xf7497adeb4b0fce9, 0xb08be507f0c15c89, 0x3d8042353b109e60,
        0x84f5ee9d115b7318, 0x89163b576789e755, 0x958e327abac28520, 0x43b71b8b00cbc4f9,
        0x03bd561ce7117376, 0x8733511b0c275aec, 0xac3cb2d659b5e491, 0xdb2ce2186a75d822,
        0x59bd2ad724215322, 0xc73282a369efa728, 0x41e002f529b27fec, 0xdbc025175f8bed34,
        0xb399dba09ef86ae5, 0xdf9b0e891ec2538f, 0xb6c2abeb903b8148, 0x84d27e3a3fa62dc0,
        0x14b5cc2608aa20f5, 0xc8b713b062764be2, 0x251cb39093934977, 0x49100271eac95eb8,
        0x3e14e2ee176e109a, 0xa9a81f99f5e6fa70, 0x3207463f5c220d15, 0xb67b5513c4992428,
        0x05a610a1a28904dc, 0x66f9f3cefcdc7418, 0x8d51c36c15a3f03a, 0x81891d39c4f0fe79,
        0xcd9aeb4a8054e4da, 0x3dd55ca55a41970a, 0x0ef49da0d11188cb, 0x7178f1fb6da7733d,
        0x0676c3651fa7d9f0, 0xd6d46f778a846ab8, 0xb45aadd85071f5e3, 0x7bdea00fd5d914f5,
        0xc52249f07d986d0c, 0xed09eb4a06280499, 0x2c16f5ef3f185dfe, 0xa6a490deaa2be716,
        0x6c700a1cd332b4b9, 0x47635ae4d88e4363, 0x3c9c7c0cb87c9bbf, 0xed82c930771a5485,
        0x1c09462035da926f, 0xf89f8e29e6225822, 0x2872392d2ee1949d, 0x6a099ddcaf903710,
        0x881f1c385c5ea68c, 0xa54afbdf1dde2a6a, 0x9f901403940f224f, 0x728edca9e8ac84ec,
        0xf21550e0b8e77093, 0x7a7252d95a6f8fa6, 0xe1deb736d9472cd7, 0x29bbfec62f343924,
        0x11aeed238d9668eb, 0xa510a53c40b698b8, 0x040300d977fb3128, 0xef022a746935e467,
        0xf87c696bf56b07d6, 0x54aef506dcb613c3, 0xfeeda919901a15c3, 0x4dc97176a832c162,
        0xd568b08071699936, 0xd2b2c99a0fd6f1b8, 0xfa8bf6d47d010c77, 0x35d1ddd0f4d75a0e,
        0x8608dde13fd7184a, 0xf140b74097354e36, 0x56e725b14f794842, 0x88ffd4793d2273ca,
        0x41437de21ce8daa0, 0x8cb72c308d408bec, 0x9007ee684dd51b0f, 0xb93f5b4251aa29c3,
        0x2337bb4651c1b8c6, 0x3ec2ea1380c7b53d, 0x203531ef5bffe1c4, 0xc18c35692524b94f,
        0x010a1af881061318, 0x5ea9ea2b92540cf3, 0x8add9e8b647c13e8, 0x94e4dfa038b4be56,
        0x5f1a6bbef4af92fd, 0x26f0a64f6cb57bf3, 0xdf51b3f022c4bfb2, 0xf97e010ef70fde09,
        0xd80a70995a29b9f8, 0xbaccda416af66892, 0xbf90e78b5faac8dd, 0x1abe3073f9c39f00,
        0x005206bf1e9134cb, 0x05978ad40b5776b4, 0xc047813851146cc0, 0x989b69fb232ecf73,
        0x3314509f4454cc7c, 0x9e4506ca14c183b1, 0x73e4160ad1bd0b86, 0xc736dd0d56376640,
        0xc7eec37b324f20ae, 0x3dd8d965cd4e1f33, 0x23a4098b98952b33, 0x5a04d9e5f4485b9f,
        0x50c3fb34ce016225, 0x75e2089fbf8d2072, 0x1699670a4e1844d1, 0x34f15ce0205a8bff,
        0x84eda2724a76583d, 0xa44bb9b08d713d92, 0xdbd15bf88a4fb721, 0x4b937dc1e49f2c7a,
        0x1620f5d688bdf643, 0x0e6ca8c1f2b5b190, 0x5cd6a07bb9950a40, 0xf42beab359bbb0c4,
        0x14d0bc9d53efc63c, 0x32be7195349aaf8c, 0x276b51b73880bbbe, 0xeeb802f240f2b5ce,
        0x21b038e47c488ea6, 0xc566c3fb06f799ad, 0x36877184c01fd0c1, 0x57e799f524e0380a,
        0xbc66e7d773e927b9, 0xbc11d721522ff464, 0x6576ad3b84b60eb5, 0x03fec75fb1db1e5c,
        0x34658ae76ea5c852, 0x427eea22a7b452dc, 0x8a7040aa579752f4, 0xc211951dc653f111,
        0xfd48fd50a2a98acc, 0xb01ded690341268e, 0x4324525445b2dff6, 0x89092ad2f2f26b61,
        0x401bbece7147ce80, 0xfb4f279741cf92eb, 0x82f417a36e23d565, 0x6fedd599c7368c44,
        0xfe60b0c54d02f348, 0x920c55f2d0ae3146, 0x186266dee862ead7, 0x92198954e380f5cb,
        0xaf9d7a7303c287c0, 0xbaa999c66930bd0e, 0x444815d3e7ea7006, 0xa855893f650f9930,
        0xf15d464784beb8e5, 0xc07e1c13061d38fe, 0x13db445b1572735b, 0x49b0f05360ee268c,
        0x72ccb553c177af4a, 0x775c783d1af43f56, 0x4e8c28e7b27ab69f, 0x88336c27f961d05c,
        0xd5f32bf817ee6649, 0x7c9f5bdd787fe20c, 0x4ba4232346621921, 0xb7278a359a9bccae,
        0xb0f45371c7c48245, 0xc2d0f9b7c53b7631, 0x43fcb30d1c474f64, 0x593ae6ef38ae8300,
        0xd376afa30e912329, 0x0fb4308df34576dc, 0x15a80298d515f551, 0xd07b99d16ad25b5d,
        0x4b805bc38af71463, 0xa2bc1b27ac83803b, 0xd8a978f2cbcf85c3, 0x88ab72cbb8b3bfd8,
        0xa4033064e0e0ffb8, 0x3291e8d39404f6c6, 0x30e78cdc183351dc, 0xacfc4a1a430f0a7e,
        0xe5703cb20b9a5add, 0xcccaa3c6f3cd4e46, 0x9d4095e6069a8484, 0x9793e74627d3c3fd,
        0x119ae9fbd56e1f29, 0xffb48a3dff734e23, 0xcf0c4b9a1aa99bfb, 0x2b337542bbb64f33,
        0x406ea3f778083d75, 0xcc95a879b5374650, 0x40112a048b6e134b, 0x6ee2b64fb5f1a730,
        0x04cdac77bb0bedc5, 0xf53f16f237bd3c51, 0x40d4b9a159e951da, 0x6aa02da6a15b9900,
        0x99f918b3126d10ce, 0xce8e6682ef9db65c, 0x47974d84e573d895, 0xbbc4682488750928,
        0x902fa58711df74b0, 0x17bc317627eac17b, 0xeafe73b9ef10ec78, 0xfb7041bd686706ab,
        0x5e4621375abb61e8, 0xef3f42a026f2412e, 0x3321f34377127820, 0x99a5a7952c772a9a,
        0x709f12350afc6cd0, 0xd3ac4e1e43946090, 0x21e643d51a23bebb, 0x81d8221c272ea458,
        0x9ba5105abc4d40ab, 0x57052e531f4b254c, 0x22333c0abd032c32, 0x1fa0a07d50264765,
        0xac3f01c197d36132, 0x6fae70e94a475732, 0xd76625372f6db574, 0x981b5141f67cd321,
        0xac0bd91b5e3752f4, 0x1b23b1870ae04034, 0x37ecf0c74a553da4, 0xc9033a88a5fc96df,
        0x9431dcd860847ad2, 0x23b9fb7d75fdba0b, 0x8836dd4447dfa4eb, 0xb1c81a0b400a01f3,
        0x913fe759695ef470, 0xe47c3d8f294d6c34, 0xedef0769617d1612, 0xdafe49f1df0355bf,
        0xbc35e94904268fa3, 0xa8ccbf5e85781a43, 0x71a2e7fca7f8f341, 0xa184010965a72cb4,
        0x049143e25f1fb3b7, 0x8ae61522e2aafecf, 0x83e7b8066a36e1c9, 0xbb59a5be8110fe55,
        0x47951945abc72d0c, 0x50b7a4ff37bdb22d, 0xa39b8efb6b294729, 0x8f106a58421dbe96,
        0x392e6ea5be925061, 0x168d66bd0eb7bb3c, 0xe6bf3181d4f8831f, 0xbf6016dec732b37e,
        0x3511309c4d60bc5a, 0xa9b36c827d27b99c, 0xaf949d5f689d7f58, 0x4c1d3a369f9bdb3c,
        0xd22197b43bd31fe2, 0xbd7343c061c947b2, 0x56daed90ccd71653, 0x9aeaac48521771d8,
        0x1e6f29030bcd022a, 0x88f29955485695b9, 0xbe96e1b876244608, 0x5f9e808f4faa1cff,
        0x75e3d9cc09b9407f, 0xfd835810da9c80f7, 0xfd2a0cdcfe16f77b, 0x0cf6e752174803e3,
        0x683f101dfa73b8f1, 0x880977038984992c, 0x0d3cb2bc78819dbf, 0xe3d5fa755e23597c,
        0xbbf210335a3790eb, 0xdbc0f972a941ab5a, 0x8d09d965199b32be, 0x30b35ba77a5f156e,
        0x8a0b458bb40fce18, 0xeba7258397ebe7a4, 0x15c13d116edda603, 0x6fa082f65f328491,
        0x99e4b824b07937a6, 0xfb9fd6992b0b27ee, 0xe7728dc84058b7cb, 0x37a3c1690d1d40be,
        0x36e669bf84ca42ae, 0x6cfb6b1d840e595c, 0x692f1e057796f888, 0xb5a1ac8d4fbc187c,
        0x8e8ae6687ae838a0, 0x5a9325f4e99b486b, 0x3a39682f210fe720, 0x0d084405864b39f8,
        0xbe6d62c78a3e4050, 0xfb1a724d5fcf3a0f, 0xdb6a01008ec16442, 0x0781855aa6b213ba,
        0xbb676070c8d3e0ad, 0x04e3c868c05d3f1c, 0x920767340eec330e, 0x094ccd860db4491f,
        0x617bf7659e91a4ac, 0x8dbf488ace623a24, 0xed42b1b68cf4f7b6, 0xc8e2b32d14c45a95,
        0xbcaf4b615a6d1dd3, 0x4b459205d0010193, 0x6f28a73ffaff9c52, 0x9ce8a082c7d61a31,
        0x0af6bb4cb72c32e7, 0xe008662e216a0f13, 0x0df4d23ec7b553e8, 0x48ac70261811d3fe,
        0x2a66ce20b0bab0d5, 0xf127514408d4f4e9, 0x37ceb29a39243da8, 0x3688173adf0f248f,
        0xec654f06e3574e43, 0x85b7a57e0ccaedbc, 0x0087848865f33328, 0x1067cf3bc7a1cb88,
        0xdc8f8ccb28a6ef9a, 0xbbbff69d9543e51b, 0xec553aa6b74bd62e, 0x02c8521c0992a13c,
        0xafa637be22c574b5, 0x428ce742dac00fe3, 0x3af35ec958ef9f37, 0x90aa28bda6412a26,
        0x11c6a0bb7883f978, 0xdb91bfbbea916411, 0x0f08f86adbf71fdc, 0x81f5e0ac8960d80c,
        0xc805d31be7c0efa6, 0x37bfafab3e05061c, 0xff1cd617e784eb22, 0xa2035bf85995fc84,
        0x9a791c095134dee3, 0xc7bd62dd98337613, 0x948429eb5bc2017b, 0x9dc50978191c45af,
        0xefe143aae3929cfa, 0x5031644a393d401f, 0x39b4a3a3b1bebc77, 0x810ca5af8e304ccf,
        0x026d294cc869f63c, 0x86b709324cc83793, 0xde8eb503d1bc061f, 0xfedb51e42eed2a0d,
        0xf789bdbdd9433ca1, 0xb23cf1f262848351, 0x9f3d7a5b33f45593, 0x162417e2c12e6da8,
        0xcaa5a46c1fdfe7c3, 0x36d5bfe98367ab05, 0x60c62e800b0cdd0c, 0x866aa904851e95c9,
        0x3ae68f7aedf10d40, 0xd63b351587817071, 0xabdd9b819cdd2e87, 0x8acc1b783429817e,
        0x0db98fcc902e1638, 0xbacec4f3a5957fef, 0xd77677705b0a21b5, 0x32295701fe4271ab,
        0xb1e932ed1d483ecc, 0xb0e71d306118cfd4, 0x02743db21504d390, 0x0fae6e86e4f2ecff,
        0x02093dd74733abac, 0x900f6a319205f876, 0x51341222b71eaa80, 0xfe81d0725b1c63d2,
        0x6c73357bda797f9e, 0x150fa2d6cf382547, 0x434f38fa659d3ffc, 0x5484226ab80f13c5,
        0x83a8e0e5f98e8dad, 0x2ae8c946139811fc, 0xb3887f312693653c, 0x84fbd0407ed59dfa,
        0x2d6695dfbef6aea2, 0xb93b14fdc04f2394, 0x0f1a178ce7d7b484, 0x3f12a31d4601fb6e,
    ],
    [
        0xb720a78f1f8a4a91, 0x9846b5f661a97262, 0x320372a17f34c517, 0x824cff46b8529a01,
        0xbdda2720142bcb30, 0x11d84588c9fd7da0, 0x02fe772d5ab3d89e, 0x9fb640cd73f7c45c,
        0xe7e49922b1f810bf, 0xcd3e7a52cebfa9f1, 0xbd1ddf67f222476c, 0xaf6dbbe2a8ad25f9,
        0xace2a977783e43c5, 0x0edae6b09e9ade95, 0xa656797eccbf29c6, 0xb7c9bf06970e164d,
        0x8bf41ec36866c5e4, 0x905c8655cdd66b70, 0xeedd7229162d7c0b, 0x4d85af0ebfb551b6,
        0x866447f8b23047dc, 0x5dfd700501751c20, 0xdf6d7dcca1c3d56d, 0x50f12e4a4c662091,
        0xe0d629dabdcb9039, 0xb15e31c78840fc17, 0x888c777b378d055f, 0x86c31b0e93b54bc1,
        0x6a919da8d0b3b578, 0xda2a5a208b3c7fbc, 0x71e9ff45f37cd717, 0x561454fd6113a9f8,
        0x38d4e81214959566, 0xd6de8cfaa26a9eca, 0x08c27292c062810c, 0xa44ca8fa2d71f863,
        0x47cc63efd20a58c8, 0xb673168b13c8a1eb, 0x9e20cd5682b0f5fd, 0xca772ec1678c8d8b,
        0x53e8a3ee69e152e4, 0xc0662cd38ef9b498, 0xbb5d95519ec8ad6d, 0x5464471a041cc340,
        0x543d1fad414d3fb1, 0x0a4c6437e339e40e, 0x04ed54fb25d78f7c, 0xbf8474449a7a4ede,
        0xe19265268c3adcc6, 0xb466ed4f57632243, 0x354c33920bfb732d, 0x48f74dc2fdcfe8c5,
        0xa90afa2a588978e2, 0x8c0eaba8499512e3, 0x6985d3586a248b04, 0x410333c6a32cbff1,
        0xce406ec00b33d4ed, 0x5ccc4e342d227656, 0x9cb22960e39ab804, 0x0390fb3c5c7773b8,
        0x0587aaa47529a18c, 0x31e892fadc6f72ab, 0x4485966db8cafbc9, 0x7fc071ef16f55d40,
        0x59e22211753dbe73, 0xedf2cacb974a82f7, 0x5602bd162378bc27, 0x6e4d82a24856b95c,
        0x56175263faf604d1, 0xa78682d01238d0c4, 0xf1580ec99a786c91, 0xeb1f87ad0afe059c,
        0xacafdb0ff2645825, 0x5e792d76fb2b3007, 0xb4ad712612d6dc4d, 0xe70e9f407ade697d,
        0xe179128876eed46a, 0xb5c6e13dcb78b1e1, 0x6d77f2115a76a56b, 0xc27a88d8bd3d3087,
        0xf059e6520999159d, 0xe88cce1bc1e2110d, 0xd42d6a9e4ccad713, 0xb48e3da831f7a958,
        0xe02dbd63e5f52c2d, 0x7e100245ce72773a, 0x07f9c00b09afb797, 0xdad2c7a328608585,
        0xb4d7cd2220255b7c, 0x57853112349124a4, 0x6956795eb104a132, 0xb9405ea9fc4ecab2,
        0x0bcc3b29a0b5f7d8, 0x33cdd403ba55cb48, 0x6edf335e0d73e98f, 0x78ebe733e70e67e6,
        0xe253b75036fe9a6c, 0x33d5705ba158a735, 0x955629f66663fa28, 0xa116196284d5dee5,
        0xd319dc3ac492ab36, 0x80109609459f8da1, 0xc0c12f0bc465c721, 0x74eea3f877ae7c7b,
        0x6889ece00033da23, 0x0ec5fbf06c4dcbf9, 0xfb3bc1f1609fc2e1, 0x26f7e5501c442289,
        0xd56aac6a38b1ef44, 0x9cb6c53202aefe83, 0x45aae3e1bb68cb9f, 0xb26b1f15f5cfd20f,
        0x848974fb42746263, 0xc8d918cb120577c9, 0xcd4fc821649bc125, 0x3ccb31b6fa5b8daf,
        0x501fcebf8d80894f, 0x8d97c229ade99108, 0x75eb6019f8969ed1, 0xca13ce28093bcbda,
        0xf73ac4da57b5c958, 0x0724e41b02cb0644, 0x6aeae78303535a39, 0xb80b4a2f286a809d,
        0x23b3f7249bb45ee6, 0x71d5c6a321b81f7b, 0x7cfc0d67f44c2a81, 0x701954389bb45ea5,
        0x9f5ad99cadd0991a, 0x3dfab85faf439654, 0x666a592d91aae024, 0x58c6b833c65af7f7,
        0x086189c1e6796314, 0x333ddde0829d6475, 0x8fd834175a323866, 0xa3c3979a52b168d4,
        0x0f22216a15f35bda, 0x9669523db9ecce81, 0x5c327b1893ed702a, 0xb829e0166eb872d7,
        0x3884a5b2d1767739, 0x32860fba1c257848, 0xc627156b0e3daff3, 0x8a37c9cdf4e7c899,
        0xf906838fd29d7cd8, 0x8cc23c0cee674093, 0xa082fffd2b0c7b93, 0x3b474ce66f5bc50d,
        0xe6ea43cb02770a76, 0xdf09f92a0776794a, 0xe90da23d083d9557, 0x55c66749f7429473,
        0x10c8614b5ed874a6, 0x78a9d807bac542ee, 0xe4bce719be8472d7, 0x09485578a0f6d341,
        0xbf4565e59e55924b, 0xb72b51cf90e7ff36, 0xf355690c9f715170, 0x8764360b903f2feb,
        0x24b2c81a809450c1, 0x08dd3fccc2293743, 0xbaf96c0e9d86fee8, 0x5a5c8ce33957b610,
        0x887a7d8336c7f76e, 0x68003fa15c82007b, 0xfeeb10516f913a6e, 0x51550df11e1bcbd3,
        0xada569047d585418, 0x26694c70ce4d7e3a, 0x0d95ad2a95fe12b5, 0x38f2c20eb5ce9706,
        0x9980bb6496c89050, 0xb072d02b23dce7ea, 0xf4f1a2c6e32d7421, 0xf380ed7d83b33b64,
        0xa731261f97791569, 0xbab307e5eda40e9c, 0xa8e1253f770ffdb8, 0x6f8dc5bc7de6300f,
        0x1de1d06d6bf1a4cb, 0xd80da38eff2b5782, 0xecb66a20606a0c64, 0xd97b06840e479259,
        0x5f96cb8c6ef70849, 0xc5e2077d435601fb, 0xeb4741deb9909be6, 0xd17d6103fac46467,
        0x4d7f57122aa81155, 0xc3e2d70d298a0dd2, 0xe9e7ec4de624cefe, 0x83cf09f2a35543ca,
        0x3a0db8027380726f, 0x43fb0ef9c724ee09, 0x716886ab317bbdaa, 0x8a6c4125ae110e53,
        0xdab01c685b04dd19, 0x80c8844069de9e18, 0x93711d49badec96f, 0x6eef460c7b1e403f,
        0x6f2b4d95d85bd0b7, 0x9263cc8504f191e1, 0x7e3a27b1fa70cd9f, 0xc330e15c1b04173f,
        0x14eddddb427c50a3, 0xfc9aa9f4ef7f5080, 0xa4bd37f57646fb1c, 0x18494d5aab411371,
        0xc30100f63a269735, 0x55ded4d9b2ea3fc3, 0xee3abd482a5016b9, 0x9fdb47bce7c8dced,
        0x853f5fe356fa6c25, 0xc4a8de811b730fdc, 0x80ae6e53cbc03826, 0x440b77de045ea1b4,
        0x36891e704e67d406, 0xe7b4d81238fe1188, 0x23c9f0bf5f51729e, 0x88053bb84b77e8e7,
        0x13b361877889dbb6, 0x8cc4b5536f215840, 0xf74df40b3f5a82bd, 0x2ba3b3d897902f36,
        0x0aa899668fec36b1, 0x1f8d0a4668bbbaea, 0x1dbc540646bb9894, 0xdbb3225317f50b57,
        0x65ed5e3efcd4cf49, 0x9f634159248e0430, 0x9e7c76b9aa32d6fe, 0xa931c17c3458b249,
        0xaf81a877f5e5abb9, 0xc1699a93fa52de99, 0xf6fd6e895341dc74, 0xcf73f8f28a44efd3,
        0xc300cb46b169b8a9, 0x2cd7b11759a9032f, 0x646ade6545a05771, 0xa21f95643d1998c9,
        0xfed39da2065b721b, 0xe6dbc7d4d5f65d1b, 0xf7eec5950ff0c37e, 0x2a373fd3f247bc0b,
        0xb0f4a61d6cc42a07, 0xf8c30ba1aef08107, 0xd1252f64fe39b5e5, 0x8b2b3ad8bf505c93,
        0x702ccc6f77b32d5d, 0x356155c568d6aee2, 0xb957c5da1a5f4139, 0x9a09a0d691a48972,
        0xa9185804a4f16d09, 0xbc0c37e213ecdc80, 0x4db8bec3581d4e48, 0x07e91a8420554c19,
        0x37f0761c7dfb4f1c, 0xd0d5016f53b0119a, 0xce55fe68e3045103, 0x38207c304f083340,
        0xce54e4b0ba8ed3c1, 0x5d15f21ac6d8176f, 0x2020c34a6b9b4a30, 0x6d943e502724bb3f,
        0x2f203db8bedc9ecd, 0x192019c069655fe1, 0xdca750bdc0c4f415, 0xd4868e290d4763d8,
        0xbeeed5ac1c9b1fcc, 0xccef850832aac870, 0x5fd7e286a8cd3e5a, 0x06532375d9d8b29c,
        0xb7742bc86280e70b, 0xdd14502bb58dfbed, 0x5079c95fc117e22b, 0x2064450e53003272,
        0xfe9615f0960de6d5, 0x72c302abf0c7b031, 0x1fd6ff6d7c0e1b23, 0x9f707b4991229927,
        0x020da8341dce66fe, 0x874adc70b3a3b801, 0xfe7f7e1936a3bf3e, 0xcde9b77729a07ddd,
        0xad0e59c6533981bd, 0xf7b80ad9d2671224, 0x28b6d93195e5b105, 0x28808cef87490b8a,
        0x9a99deb5053e97e7, 0x53ff76f961bc4105, 0x8d6b620793dd45c7, 0xc6a4eb7d76056358,
        0x0e6f2f34da301d39, 0x188156abfb9b6510, 0x820b49a0b8637b5f, 0x192c3a45f204aed5,
        0x36e0267ddf515727, 0x2e0d394b6dae3e97, 0x1532991e7537b803, 0x5176eda5586e8f77,
        0x5ab01a6b83413df4, 0x01220cea81dbfaef, 0xab241cfa91eab45e, 0xd985c7d3a720e347,
        0x8369b04c836a7e20, 0xcae0c64960619e10, 0xe5a652797149b102, 0xefe1353917825306,
        0x975cb8de78d406f0, 0x9068d7d0076b97c3, 0x93d5d61c2aa222a9, 0x42092d6471761412,
        0x75bda8d8cea6885c, 0x0ea00013fde58906, 0xafdb3e8bedc1819f, 0xa2124b6239e44585,
        0xab6381413fc992d1, 0xd3191146e6496ba4, 0xe76edf007fc8615a, 0x51ecd70162a9d06e,
        0x68e7098a5ac819cd, 0x684453635bc8fc81, 0xf2c4b0b27de1d701, 0x71aa384b176cdb31,
        0xf616513be281acfb, 0xdaff9434a509d470, 0xbf10e000b8b0de24, 0x53f3f1bbf9d922d1,
        0x26639ff6b91e090d, 0x1c5cc5eb4d984e59, 0x98197c90213a5d61, 0x37867f724c18c9fb,
        0x50b1cb444ecdb47a, 0x4b237704fb5310a0, 0x3889951a2f5fed51, 0xb92dd45c915a2f74,
        0x0067d971867b54e1, 0x523a4dd949f698f8, 0x5d4b9169814b8666, 0x6bb230f3839e69da,
        0x37c8b0c8f4b1b945, 0xdddff68e1283913b, 0x1e90f3c8b1100226, 0x3501e29ec6725715,
        0xae69e1e7abd64dea, 0x80c0e02a4694cec2, 0xf8f5d2ca20a32d37, 0xec8ea63f97649102,
        0xea941b620bd0cb7a, 0x560b43876a45436b, 0x8827f47c2841a54c, 0xb1175954f05f31b3,
        0x5e57321ce31d3a6e, 0x6445e88d7c4a8fc9, 0xaf3baef63ee989fc, 0xff9eb424c359d90f,
        0xf2f7c10238ad4533, 0xc35be1cce62844de, 0xe9ae172af4abccf0, 0x93abf63dc993c881,
        0xe04b532d3daad2a9, 0xe3af28cf4c66e572, 0x77772fd3eaf96f9c, 0x47e3384463ece447,
        0x179b8922f3c91eda, 0xffe0026c0905332d, 0xb1cf204c7b214af0, 0x980789748bdf09d5,
        0x5758a76153c19f62, 0xffddf6d16b0df67c, 0x1cbbb56bd0528224, 0xeb253484c50c47b4,
        0x560b0d7be3d293e3, 0x851d1cb9b1b7eba5, 0x16c0d6f91ffff8ec, 0x9d0c842d918acf33,
        0xbfc3e62ec0c0432e, 0x79fa13c337a9eda4, 0x33545722e7caa690, 0x14c8a671174d241a,
        0xb6c326fa0cad0bb0, 0x15f8154135115466, 0x1b62c4a59a02cdb8, 0x00e14c622044a663,
        0x9683d61037ffe348, 0x6d10b6491f65d298, 0x8da358857d724cb6, 0x1ada294142882de1,
        0xaf1796295e0a6319, 0x0191bb0a8bbbfcd5, 0x2a5f298d28de3ce5, 0x547e7a03cd538b4a,
        0x94cd65963486eb84, 0x9ad10ed6df33f336, 0x9bbd014a6f10fcc7, 0x5fd2f47f28019486,
        0xcbf695550dcb78d5, 0x4c3cf970feebb972, 0xf8186fc5e48c49be, 0x8a23f6bf515acb02,
        0xafe9032bf544622a, 0xf843a50101c83e5a, 0x9e0f5e879bf90a6d, 0xb69415124d822be5,
        0xa6e838054618629d, 0x24889098e32517b5, 0xf179e00e05a24e23, 0x5626fabb1225a8e6,
        0x9cf153a1cc71b37b, 0xd05c8c0ee97805e1, 0xf383b46793b8a344, 0xf74d082ac516777a,
        0xe5e35e9aa9e7aa7c, 0xdca90694ff9e8fae, 0x159cb94362b4312d, 0xbd5d60056c9b4f4d,
        0xcd7a4f338dbe78a2, 0xfd9a8d04c285d0e6, 0xf66cfdb159b7b2f7, 0xdf4afe23a88cb38c,
        0x8a3a003bae834622, 0x21e8f908b0c84d39, 0xccc050b1fb270e67, 0xc60aa2cb83421891,
        0x290e3ee71a11ced6, 0x9caf7bf8ba1e27e4, 0x4ed09840f832749a, 0x83826e8f86b00be2,
        0x4060b94343cccc06, 0x95ec2cb20197adff, 0x92dfb3e3851d311c, 0xa1f34ce2ce947692,
        0x457463830ebea868, 0x60488755b32ee5d1, 0x40b1a8d9b51c5df4, 0x4a7f2af33c739f02,
        0x5746227c32e686ca, 0x02bb728c318e4675, 0x0f1f962d5dfab0fe, 0x904d3addac9ade57,
        0x46db9cc654631c9a, 0x7d09479d8f51a6a6, 0x0ef33e288bb66ed0, 0x99abfa37ada8ba26,
        0xe21c362560f2cb10, 0x162be77d07d1937f, 0x8b56574983938a6d, 0xb1317c1300423dd9,
        0x5bf205e52b7b5140, 0x0f3c88c621a4e64f, 0x9aac623c9ec47314, 0x38b1ad2ec16a2e4a,
        0x85e79ac9328b587b, 0xff7732b808fc2688, 0x807a398efe1a1c63, 0x37631e20d2c4145f,
        0x32747db342c05747, 0x0ca4838741d94897, 0xb06061e12ceed4fb, 0xe6bfdf81b16e9bdd,
        0xe60bf9c7f2b17a99, 0x5dd3c7a0763d5f67, 0x0d3d308ac662ee38, 0x0e69248c435bfa89,
        0x6b441e39118a2042, 0xf11fd4c1fe71ee1e, 0x4346bd29744bf7ab, 0xb51bc6aaf11a9dc1,
        0x38fb526423a2ac61, 0x2483a0f5856a2934, 0xe5361efe946f16bd, 0x270a9c2b9507e709,
        0xa6e9d02444771c7e, 0x8eaebceb89d8cd40, 0x7eab76f527a6e2c5, 0xf4e26d89bacf0dd3,
        0x27f61727088bfd7d, 0x2e7e9546f97aa84e, 0x277943d78db37edb, 0x12b13fcadd254e60,
        0x9f809d4f3299e070, 0xf08d0d6bfe62b449, 0x287fc2bfda16c637, 0x2ae727cba696b75d,
        0x94084169a060a0d4, 0xa886d3ebdad3ae53, 0x0b51d7e32269d1de, 0x11ce6735f6b70284,
        0x5be7c42965e7a651, 0xd5c39337d5a4bdaa, 0x69a194ce95f19d25, 0x49cffcdb539807b7,
        0x4f6adeb59458ec1e, 0x853bf6f54c3d0e49, 0x56479ffb144ae0da, 0xf69e6144f419c385,
        0x201799273b7d71a8, 0xcb278aaf47164a55, 0xccb43d2639e1ca25, 0x3a3eb3859a3c6746,
        0xd12854f53fcb0205, 0x0efe970776ddc683, 0x88776fe1cedcccb0, 0x025e4177e0d5ef6a,
        0x1669075bba1d1550, 0x86e955b71f979fed, 0x5907374270e667b5, 0x847f3040fbb457ae,
        0x6c7af09e2fac20a9, 0x38b4d1947b176367, 0xd813864e50c86c19, 0xf49431bca46eab4c,
    ],
    [
        0x35118434d0614aa1, 0x4b33e020bad830d2, 0xb0f8c0ded2d638ad, 0x6c5389aff727ef3a,
        0xe08a10dfea2d8d84, 0xe55f34c883dc5447, 0x3e61a9eabd25609c, 0xb13caaddca9a9526,
        0x20e14b4cfcadb2ad, 0x588f58b5ebbe949f, 0xeab6400ce6bb4d34, 0xd64bab7799458b24,
        0xe743f6176aa5a1b8, 0xaacfe2d38fc2ed93, 0x289801085e3be13e, 0x605f581a88a45b65,
        0xc5e49f07f7af9756, 0xb261727111d1323b, 0xda852a71ee3bf44a, 0xc28c1f81e5dcd066,
        0xb79a8b158d3ab381, 0xc64975fa65471473, 0x051d99c98534a355, 0x3f06c14699775c4e,
        0xaff1682f2d1143f5, 0x87ddf0ec8c152354, 0xb7408e3303bb523c, 0x4a0b581d84d1c5b2,
        0x6944fe1418d85e6b, 0x2b466ae215145a20, 0xe762191c36abac30, 0x9b805759c8544885,
        0x487ff9dad0a358a0, 0x7eb2aeb558c34b85, 0xed394cfa9b60487b, 0xd4288fb51c704922,
        0x2365739e3da7073d, 0x5a5455db52fdc8d3, 0x71ca8da88f02c551, 0x51383e614f4c9c8b,
        0xb54867a6a8701750, 0xc3d3c80eb83f2cb9, 0x5663e123423fbbb6, 0x4bd00db0b8dbf031,
        0x84a09347ccf2d10b, 0x868c0f8d314e2a25, 0xd7d1f23526879f8b, 0x7835e4e9876f8f38,
        0x0b93365c2d128add, 0x92f0b738351c8f26, 0x7c2ec289d3dc8683, 0xcb89b484170dd677,
        0xa546038068fbed5f, 0xcf0a2f94e789d854, 0x94343b7a9cd6f37a, 0x1c1bf593c60f1799,
        0xaea2abd08ac425a1, 0xd4ad09c71c832c35, 0x551768ca5b95b36d, 0xb9837258d430488c,
        0x3809904b84df75ff, 0x3e128e2d07ff8f9a, 0x0ab9650e15ca3037, 0x14a4517480eed542,
        0x8bae9779d1418434, 0x5c101f9e590dffb3, 0x47fc8c774f299d5f, 0x95ffeb9533db88fb,
        0xe31f05e7e97dda79, 0xbe76243b04e4e9a0, 0x4ccaea93b3839c8b, 0x701c63fa69a303e9,
        0x4cb4a0928c3b8c23, 0xb77622966982215b, 0x7364dc55c0d49bf2, 0x6fe19e252eba3064,
        0xaf84652d1b5b2bd6, 0x8344664578f0f858, 0x5e8c0ac5414af955, 0xcb78920068e58c1c,
        0xffd65bcc9e5b871f, 0x7769247ce4c6046d, 0x39b4ef6cd7b5c6da, 0x64d1268dff9e3493,
        0x6bb951e8db0bb7c0, 0x1f8eec02ff1f2aad, 0xe3f3ddd3458b764b, 0xb10a4ed3f66e7d05,
        0x5837e83ab4d6ed7f, 0xdec85db77a953398, 0x6d21aa4ac093aaf1, 0xfc825a4a0dfa90cb,
        0x90bd8208de7b904f, 0x28ccb2cefbac86b7, 0xe21acfaa8b75b5cb, 0xbe9b99ca7bfcad78,
        0x4b20c3699c242aec, 0xa256a478cf5074fc, 0xa4259f91b483a686, 0xaadd19688c1363c5,
        0xfb7423ea8e2c078f, 0x60485f39b2945868, 0x782d5da4074cebc0, 0x78d171829182fc81,
        0x1387e94087691191, 0xf4ef0b548f602141, 0xcc55ce365424d48f, 0x866e0bbe7d2cb92d,
        0x571cd4d908ee5aef, 0x4b3dad3a0be90b12, 0xcc849c85e37d5f9f, 0xcd421d77090ca6b6,
        0x883f43c313200221, 0xadd39ac808569159, 0x25898cd8690e5d08, 0x36b1d3d16b3ee110,
        0xa65d059f87ed0d37, 0x9d39cd5110fbf531, 0xa71e3853237190a9, 0x388d695064ef800f,
        0xc619c17d4a02e136, 0x5bebe9130e17fb8f, 0x8850a9b0c7df6d3f, 0xf9fc178b7abc184b,
        0x454c63fd67a7c214, 0x0653c0b2ad7e8d5e, 0x16b1fa71ac06feb0, 0xadd645613362ef7f,
        0xf5641d82b8c15b89, 0xcd0e0498bc80ecb0, 0xd1720a929b68d48e, 0x27cb70429dae0777,
        0xfe95f84a4e9ab132, 0x78fb4cbc819166a2, 0x721cefa3e43736e2, 0xb97d667ab0a50f3c,
        0x50fe3c1a1caa9db1, 0x3cc83dd6cff863c0, 0xd6fa6e40e6959c7e, 0x9aabd83d74068f03,
        0x8b1beab1092e2c46, 0x58de6f09dda35ec4, 0x0f08e93beaaa71a5, 0x14cbed65bc5bfe1c,
        0x62a95357423eed7b, 0xf9c1aaabcfa6aac3, 0x472e699644f4e720, 0xab0db38ebdf8992c,
        0x5ebd3854be4b3353, 0x1b520fcc8d0dd401, 0xbd7e51aabc8c03bd, 0x9300e3ca3a3ab903,
        0xf3e179beb4bce662, 0x927a8b100b57108f, 0x52aae4c9a85d6fcf, 0x2df2ec9811c72996,
        0x5811f3b6a4597137, 0xb891b70704106b98, 0x4f5e6b9fd180cc32, 0xd1db36e12b8fe78e,
        0x7813a44c1c7b145f, 0x73f23a5698c1de9b, 0x11f51779179a5cca, 0x9b5c42d752f2cc4e,
        0x08f5132e3adfb6f3, 0x54ce956700af0abe, 0x99094980c1a43a2d, 0xbed6f0d490d72cb4,
        0xc451f178bd2f75dc, 0x3afb343db9612928, 0x8bca99b93b6d5467, 0xad36406e1dd3db2c,
        0x1379ac02a450dd82, 0x09970da432aaffcf, 0x26b5488a6b9cd82f, 0x71a1d12dad0604f7,
        0x9d3b5a534d309b2d, 0x80866e5e61098dd5, 0x9bed0f32bcc67531, 0xe50ada4f0d7b51b4,
        0xff60beda208aa8cc, 0x980ed5d46de44e3c, 0xfcbebde7a8a28451, 0xf78ef00fce927a87,
        0xf09a57d31b2c4acb, 0xbf8efbcd8b45b250, 0xe5a2737f5008c00a, 0x035d30790c5e6a11,
        0x79e0ffde2d873c09, 0x7bb30bb5b1930408, 0x501796600faa3dca, 0x39228bfcc5dd0396,
        0x2383af56416432eb, 0x302787f852aa293e, 0xf944e708a1c6f103, 0xd20afe81616dbf02,
        0xacd6f7fc927e216f, 0x0bdfb703ae37f80a, 0x229cb244d0035908, 0x27c03d7c68e6557f,
        0x23cc56e881c0a4e9, 0x81ec094d01098f51, 0x7960a9977eaae61c, 0xaef812186fdf8655,
        0x7e857549e2518383, 0x891e5ecdf78c69b1, 0x1bc50407ce4524f0, 0xd1af7dc7f02b11d7,
        0x93cf64d5b2ec687c, 0xf7f13317354492e2, 0xbbd19d389191614b, 0xe3790c26320cce30,
        0x107ba27d2eb3b0fe, 0xcd73209215e14346, 0xcd7abf4ae8d42e38, 0x0a5610e0de3c3e1f,
        0xfa8d78628caa5fbb, 0xb38b732f525f78f2, 0xf5d057c9b726afa9, 0x82077a6e7dde922e,
        0x7ea43767d4ab5433, 0xe40a231029696a08, 0x0135830955deffdd, 0x37255a2dd5387bcf,
        0x87c6beded6f2d3ee, 0xeffd490e61ce6535, 0x00b00ef086c1d1c7, 0xf9e4bc96c298e794,
        0x470a4205710a26fe, 0x17bff77be8d15f54, 0xe1b02ff024890d9b, 0x987612917bea62f0,
        0x31a099d3d1da6080, 0x7abe56208db5c907, 0x299ff0ea316fc956, 0x969dc881e4e3f194,
        0x5b7f02f5ae404542, 0xe711e9cf8a6d894d, 0x1b068e8d91099141, 0x51c2d1581a22e872,
        0x60f0db16cf91a023, 0x7d0c1c6fcae578f6, 0x356ba80cac762453, 0xa2f4fb57fd9afdbc,
        0xc91ff11b33d2d65e, 0xaedbae3778425caa, 0xfa928367d711d2be, 0x2a0104196abfff9f,
        0xc6fce6fc87b4eb40, 0xbef3cafee5ca21e4, 0x9a577c0dad076e3c, 0x20cbe540fbc2182b,
        0x620a3293cef301bf, 0x91d187054c158386, 0x368b2d891c1aaeae, 0xe9fdf903ea0c538b,
        0xa552d3f02c73f990, 0xbfd64ced220f8fc8, 0x36e34e04a146889b, 0x0fab8e18914bf706,
        0x025e27bd83c5a3ea, 0xf869288ec217cda8, 0x936bc1dc7f10aebb, 0xab24e712eb105607,
        0x5ab091990867753f, 0x214d69aabe0432d0, 0x918b3c6394ea77c2, 0xf506d27b65593fef,
        0x6be2ece1a9383124, 0xff4a4ba991c13d67, 0x6a6a2e6a921be66b, 0xb8341bc0cd3a7cc8,
        0x04b87dd7be5da479, 0x4bd65afde91befb6, 0xa2bcc2ec30c0e99d, 0x59b408a026e3e4b0,
        0x9d01654d46786cb4, 0x616478d88f878a76, 0xf0d974283160e63f, 0xe28273121af56fb7,
        0xbdde016f59ea54c1, 0x7e696084eb306d56, 0x7979bb5cf92ca5b2, 0x89acda109f28b584,
        0x7ec39109a204a36f, 0x1210fed0636d9e11, 0x1b1ab943992a66f3, 0x044b3a3ea150ad32,
        0x34d2a89b47d393b1, 0x2569df2a4a6c15c8, 0x6e596d2af1231aed, 0xd604f076af0804ac,
        0xbe0afeb42b6c9b33, 0x0021c5310e14a7ec, 0x4eedaddb45d82f7c, 0x27594570ef3cd3fc,
        0x0d0fcf9749f87f03, 0xcd692215cf019b08, 0xd973a8d8a0ceb256, 0xcb3ac9e42a115bc8,
        0x17366e7f2a7df4ce, 0x511521af0a80d07a, 0x040dc00f35ee636f, 0xfe7dfcc8429e45e9,
        0x20f0ebbd5b0e47be, 0x13d89cee975f59e4, 0xd3224c577680da5e, 0xb1b9b81daa6dd8e8,
        0x078c4e5ef65f65d2, 0x35804bc17bd278b8, 0xba8fd2eac3668951, 0x13a7b08eb0b7ffe2,
        0xa161bb70b21b02f7, 0x08a18be7688076f1, 0xbe7c611c2afa6a8a, 0x849994e29d76812f,
        0x8f38c8e8237c2bdf, 0xc4cf843c80c21fb4, 0xf6fa652ab46f0310, 0x6bfd91ec74d235de,
        0x8df82e9ea6bbdc7d, 0xcf5cebe0be0ee377, 0xb0aad2d6e74a2a28, 0x3b1e66f30517cd09,
        0xed010c0d50f120fc, 0x2662bb7162af4156, 0xc93a1002b67332e7, 0x4936aedd8dd86ccb,
        0x5a253d19f9d47c55, 0xe4e52a9c6455957d, 0x2cf4997f76866dd1, 0x0a1ad85dfaa457b2,
        0x8309442a7fc20081, 0x6e78063d487d5575, 0x37113baac27da9f2, 0x8e9aefe8a01a77b7,
        0xdcceabd71a134c0b, 0x3e78cd8cf25b8f8d, 0x29318d7b57ba0582, 0xe9e5fe296ab8504e,
        0xf46d8352cf3a1aa2, 0x3579d49c7423e0f5, 0x258bba0734d13871, 0x7e2a2365d75d9a9c,
        0xc488c8293c1ac962, 0x9befefef50269227, 0x4b1f7936c4e3e4f3, 0x54578eb8e49fe66f,
        0xa43a4a57a30fb76e, 0xdaea218d2043caa1, 0x1ebe0246ceef1a9c, 0xc65bc2a36671ae59,
        0x1e9f97c673f78679, 0x91e202a0fffc97a5, 0x6c1a702bd80eaa89, 0xa441140ab3bb2628,
        0x94d9edc83cd813bf, 0x3efdb22ddc9c800a, 0x7ae170a55061c943, 0xf475953491a8c364,
        0x0b7585f80af6273d, 0x98d70b389ae12255, 0x443ecdb96d9956b9, 0xb45efd5de0a5ab75,
        0x5bb3560c9830ebec, 0xe38147168a2a2851, 0xab40f94bd84a9cbb, 0x20028f5c48224b6f,
        0xcc20dde8317d8b4b, 0x86006ed40092de2c, 0xaae2597b3399d679, 0x616056a00be328aa,
        0xa92ed905f347dccf, 0xf4bee96a6a2d7bee, 0x00fad1ed2d241329, 0x4619da3e6da4cc8f,
        0x075301fb95bcb925, 0xabbb3fc50c3a2648, 0x5dd9142a04259dac, 0x166a9279f7a85553,
        0x61cf96de13203c2c, 0x97a72d758a04133a, 0x86a4d62779fcbc59, 0x96ec237824aa0a47,
        0x0f336aa8d75ec634, 0xdc03a0388913b128, 0xedbb034bca52f53c, 0x24b46dce12e40644,
        0x443b3b8ab828101f, 0xce64f29150ae9d30, 0xf4b53dd4f98d1132, 0x32196f8a0a986d68,
        0x422b4e031a9bcc88, 0x94743ba8fadc1eab, 0xc4214abfbcbba8ca, 0x266d0f06a303dff4,
        0x1f00eb8bc3046cab, 0x226b621e8d303a7e, 0xc7b3c63652e90e29, 0x8eeafe875ae2a402,
        0xa4875091c5c6925c, 0x2adf53ede60ff4d9, 0x322faf40d315963a, 0x45c827bd83c9eaf3,
        0xa8f669a0a1662f72, 0x119f6d6e1b2af15f, 0x4fedb6473dcb885e, 0x9c3bb05af11f8963,
        0xabe8b36714b46863, 0xfa86e376caddfa11, 0x2c534200071ec517, 0x90a5f7004a1c29d7,
        0x4fd514f8e090f2be, 0x10c2ed0f0aef7dcd, 0xa24c9e257a01dcb9, 0x41ce078e1d52384b,
        0xcb614fe02edce91c, 0xd83c428e28dc7a57, 0xd28f8c15d23f1d64, 0x761eabcad37bf6bd,
        0xa2c7a7a0440a1699, 0x9a9e27474d947ada, 0xaf8c7ea04d47c578, 0xf5c607c52744eb2d,
        0x3619cf2c1142265d, 0xb459e2568dfda5f2, 0x8c16a75d2f64f912, 0x1709c29355377d5c,
        0x5c5825807c254726, 0xde76d41b1de9183e, 0x2e4cf65cdb303776, 0xf7afed3750abf907,
        0xab033b485303dd7c, 0xda825b0a819adda4, 0xb2a2a1e568df6e74, 0x8f6dd943e12b07c8,
        0x261ad25df59e3be9, 0xc6c553a6a605671c, 0x61b82e195dbdffd1, 0x8ac191907937e0bd,
        0x1d408003e1b440ce, 0xa77086e8fb54720e, 0xd14253bb422bf3d1, 0x15ff064319d70aff,
        0xdff401d6d0bef848, 0x6b7c49f34218755a, 0x78169b8e6106a132, 0xf5699241af8d6168,
        0xc42e3b2d1603e53f, 0x4b096971fde23279, 0xe987a8e187fb2713, 0x0ff1016808f2d8fa,
        0xd83848198cfc0dea, 0xee0d4440dc0353c9, 0x7b99a196d5a75030, 0x0307b826248f5a65,
        0x4e1ce22b671e4f36, 0x2c395d978176316f, 0x349a61337aa4aab2, 0xe8114f4eabb416e3,
        0x959f315526f39f8c, 0x5c9bc103c95987ed, 0xc075d178c8558307, 0x27a0698fc11f3859,
        0x3bf947df8e9c098d, 0x81ec38533d288d4c, 0x49ba55700c0619d1, 0xc298e23689518edb,
        0xc979209f68a1d3e1, 0xbbe33d81b08c2c8c, 0x009fca2750f0a645, 0xdf94cac730c80488,
        0xbcfde36382897d1a, 0xd50a08da404be227, 0x47b52ffe67d3f86a, 0x2de4719cb3b44748,
        0x3918138eda1c97f8, 0x926be98affa5db7b, 0x3d45c4e3326505f5, 0x3115f1b19e72c300,
        0x62b960097e9a5fa9, 0x03bc53c79fc8dca8, 0x93e85bea6d01728f, 0x7d192922be1cf79c,
        0xbdc4ea3b4eaf0c10, 0x19417bc4b37fc947, 0xcad17044ad3a6eae, 0x0d6264ebd8d8f337,
        0xf84d3f9605c559a4, 0x066a445e8f3f403e, 0x89e490c2bbf7ab50, 0x06d11ba4de6bc25d,
        0xea13f8fd70ab7b3d, 0x8a9fc79aaac779e5, 0x42eaa12e78e8affb, 0x92183692c4ce1a69,
        0x6703eac77a9c1974, 0x74fefb46de710934, 0x49d23e8c2301b373, 0x4bb551c6325abaf6,
        0x95903d913b69facc, 0x182c923886f010d2, 0x0e5e57825a181dfe, 0xf97d3fcb1af4f84c,
        0xb42a47af606b3142, 0x8427775719c29e8e, 0x8c9dc4c66805c78b, 0x3c58e0b04bc6a829,
        0x3c8ed7ceee4bcbb6, 0xc1a5a44768a40f68, 0x40a741eb9e387d16, 0x0a7b9be3c548a60b,
    ],
    [
        0xe5255c302ade9556, 0x71c975de4e92defc, 0xde59fe5d8e7a4174, 0xf67233c6ba4e4651,
        0xb468c3829e6b1d70, 0x96a97a12fe4674b4, 0x47d9201608aaba2a, 0xc066ee2fda3adfe0,
        0xbb9ec3e9da2dce70, 0x5cdbda39e983ba13, 0x96be66c5dc45375a, 0xcdfcfa67dfd6586e,
        0xd56c11ce6a281d1d, 0x0f14eb110dd26330, 0xd617827783c9f829, 0x03977889f1ef2232,
        0x93b6abc370818472, 0x4ce174e2e679eb71, 0x74e1457a48f90174, 0x5deeb2eb0d1b96aa,
        0xdf1218be7f6fe2d4, 0x45934bdd3cbab88a, 0xc92e6a8cfa19ddd9, 0xe9b60e575ef764b4,
        0xba9a6268542b137e, 0x3f3072acce81fbaf, 0x32d7012999d5b1c1, 0x26a45c3ea7b82f5c,
        0xa9d884695e40c5f4, 0x4b84fa4a884a4c6d, 0xf9893cfb1d33ac50, 0xf7cd1bcc89e35108,
        0x793c8a89193520c0, 0xbdf9941c8f3a7eec, 0xd9dd8817a8a16445, 0xf48703adcdee6f8d,
        0x2e7f6e072ddb1173, 0x3602ad09157cc9e1, 0x82ecd0afcfa869a1, 0x47b9368b393ab61c,
        0xaa66d8c518c616a7, 0x2475b1102d024923, 0xf800bd76415aa7a5, 0x94237ba25d39731d,
        0x5157e93d1931299b, 0xa825c3c574836028, 0xb4e4aa3019780b2a, 0x8c1725ed142596dc,
        0xdec7205580064047, 0x9b72ffd0a6af09d1, 0x23638245ecde1629, 0x2c1a229ee5aaa980,
        0x4878b0b13b75e6d9, 0x434cbdb3c166afcf, 0xa0e15175acd1e4f0, 0xbeaf1a1696671c53,
        0x54dfec97f5999a71, 0xf93c05bc72ebb976, 0x15b580b61841f719, 0x0e9de4106968ddb9,
        0xd69cefb8192503be, 0x5bb8680294922922, 0x1615919d961ddf76, 0x7d67a63d5b99708d,
        0xe328af1b75ba2e9b, 0x81aeb173d0089883, 0xaedff2d2ab3b0f3d, 0x8cf956600714d4ac,
        0x1a9019784cd025fb, 0x2a132ae6f7c97b12, 0x12b62343f3f4c812, 0xce6a9bdc0c964e7d,
        0x02d5353ed29bcdda, 0x20f3de576e96c8b2, 0x780ee0624a6c24e8, 0x358953e51ba23faa,
        0xfb01f45570daeb19, 0xff6222969b036325, 0x67b20e6cc06675f1, 0xbe2c82f19c7409a5,
        0x0e984be6888357af, 0x17c76176d1c183bd, 0xb80926429b4734da, 0x25783ce33e52ccf1,
        0x850c8598fabd8326, 0x72821e741b19dce4, 0x7db7e2ee3528e628, 0x61ad29fcbe73c698,
        0x43a52b904c7926e2, 0xa387bb200ff56a32, 0x72727c1524a90c34, 0x494694deea98adfb,
        0x4314d233aa5993c5, 0x82cb9aee55c830ab, 0x74cf7dd41e5ff4e5, 0x924efa4393f1cbaf,
        0x356402d0655f5ff2, 0x6e1b7daba1f26666, 0xd61f6aec0e00fa92, 0xf1ba030912d39694,
        0xa704416e816ffc8d, 0xf3c4a54c13603196, 0xa637938adccf2e47, 0xdb8ee3a827441f92,
        0xa93946a66d28fb98, 0x0cc9245dc303c1e7, 0x015573d33aa74349, 0x6359d1958532a968,
        0xd6249c103a8035a4, 0xec4fd74b8f55343a, 0x639b8fcb356ddd4e, 0xd321d49ab2d413a6,
        0x3f828c014319f87b, 0xcbac42bda9a459f3, 0xee6e9a65cc09daa5, 0x446cd46bd29eb83e,
        0xbe8421f0fe60f98a, 0x7b79e808bf663e65, 0xeca899a4868b4e04, 0x9be643296bc4cbbf,
        0xdb5be461e586a578, 0xe65b30c0aaae099e, 0x24f5fadbd7045528, 0x10f0f42912985b32,
        0xb692128d40f928fc, 0x2f45a7dc89181334, 0xdba095cb53f2f514, 0xfb29bef74b80189a,
        0x9d3391ef41ce9e47, 0x8a30ce4a2ec09190, 0x4688e9e01f053470, 0xd70decc371f1f8da,
        0x4bf50c7e5e6879e8, 0x5afcd087a5f5ae91, 0xb35bf043464f4b4c, 0x04a0115b0c859476,
        0xc193244ab215233c, 0x2ff05aa766b76faa, 0xc6fbfd1a013a13ee, 0x0f467275aeec5d6f,
        0xbb442a0d8f29fcc1, 0xaf833fb8186e735a, 0x8a63fb89cb2d5b9d, 0x35ac44f932004e03,
        0x2a7ca1b03fe0c135, 0x4bf67be803a69f58, 0x291e75ba5800ea72, 0xe4e251f429d534ef,
        0x1214d3d7b0f7cf49, 0x532f706d8661e32d, 0x997a00ebf321fc88, 0x18489017dd2be1ee,
        0x28785bf5feae554e, 0x2b08a81199865968, 0x57dad21c715662b1, 0x44a06ec3134b182c,
        0x5eab88d09c19bbc5, 0xd4cfdf040cc927cc, 0x72ec32e5f7165331, 0xe3716559f35b13ac,
        0x0cf889ee1af5ddd6, 0xe7a0dfa42d79a58f, 0x594a620d17d95f07, 0xeb2d4d929fcda52c,
        0x55acfaa352e26265, 0x354fc6ed8473ae27, 0x1d2858f2c041648a, 0x214a6a5ffb0b0117,
        0x4fc30de5133336dd, 0x290b7a7703667a7a, 0xd5143779af5ec789, 0x8bca94c9f86b8b75,
        0xcb18fcf181245740, 0x009bcab560a683b3, 0x6ed7b10c9322c245, 0x19c25fc32b5e8ae7,
        0xffcad5c3ff4d6c4a, 0x150806c0f560dc93, 0xf440bb81ee18f9cf, 0xe0c044da7f5aa015,
        0x6312821bc69d6820, 0xd445f1b0a3c3b159, 0x713b4e9e782b7ee7, 0xc8f66f6380017bf3,
        0xf9bc3f04cfb4e7ad, 0x4194721ac8427104, 0xe443c25798df2c22, 0xbe21b10f8ca7d2fa,
        0x13b11dfda7ed8c47, 0xf7c466d51ec5cce4, 0xf04960ba1e6c076c, 0x3cb7eeaa241c402e,
        0xb74cd668fb0ffcc9, 0x426e783869a36d64, 0x29ff3fb197c95c7c, 0xb674732a7078370e,
        0x6b862c0f71cf7119, 0xfd1d3a32d4805ddb, 0xdc9391c0d8e8ba16, 0xb5e02dc99c95699c,
        0xb8d5727fd27a4e2a, 0xa876bc62d7f84b47, 0x6ce1496c21fc4f9c, 0xb815967a5b0e6b2a,
        0x9aa60157e9b2f829, 0x7801b02fc7e710f5, 0xcb28128c038c00fe, 0x048bb359856823a3,
        0x0c6c4a1194a82d67, 0x937a391cc0ee530c, 0x25a21b38c72c28f7, 0x9fe9693d55797dad,
        0xeaf60d311805345b, 0x3dbfc22573a9930e, 0x7605a2c9acdf205f, 0xac95e3b67febda71,
        0xc023b6880ab61576, 0x7279f913084cb1f2, 0x76b4b6ec132f3294, 0x5570befa75b82b41,
        0x795e1c21b385d3cd, 0x787efddea16bef30, 0xa082c59abb4679cf, 0xa0a88e8760370a1d,
        0x3eb7eb35b3f149b2, 0x25e0ddb51f2b9667, 0xa1534fdaf4b15001, 0x984f51115507b401,
        0x9c2442538b758c94, 0xb4cf4251651b8003, 0xcf9abfe8c0dfacd2, 0x429e61ad43759430,
        0x7e000a347f0c805e, 0x2ab8eb6dd87dbd9c, 0x32330b4bd76dd2dd, 0xdb5c6a9cde316226,
        0xb4d84c9dad5ebe1f, 0x29877303cd3adea6, 0x84ec0bc657f39c76, 0xfc32cbebbd3c7dc6,
        0xee6659b267a6e030, 0x71c636e4c57787ee, 0x99e4d6e8955200e0, 0xa55d5f23a18f23f7,
        0x4c01937400d2db20, 0xdf9f92b7b35b2be9, 0xed177e1eb7d58c1a, 0x92d700f28836ff35,
        0x6e5448a9b11f07aa, 0x3af3487f3025853e, 0x48acf5a7d7eed58b, 0x0844d8e8c610ae2b,
        0x90bd279f5a196756, 0x52d15eedbb3bd5f3, 0xe52767224c9f17d5, 0x328cb6de2c5c2767,
        0xc67103e4e3226acf, 0x5899a0b6309bd2d7, 0xffb930cc85e6a8df, 0x4270416d4ccc773b,
        0x6a53ce8906240e95, 0x0a989dc0d7b5c8bd, 0xcc0f8c4a5d460c0d, 0xf8301f6211377eb9,
        0x79e56194b6c5b114, 0x962ef8a90d677d1f, 0x03130c0981f272c5, 0xb01bf133012b89b4,
        0x1f3f6e6190ae8113, 0xa0bf821f5c948f43, 0x070a51418c7c6c6e, 0x2e108d6cec1cf253,
        0x0c90c359bb83ae74, 0x2daa9d901f7daaff, 0x2193e0c9505aa4d2, 0x6a173d69c6ab9935,
        0xc5caf65bbfee2c5f, 0x72d1cb2a3cbeb0f1, 0x9fca58cfea9c3ed0, 0xa69853465ac96092,
        0xb3ec818110933a55, 0x78cca6c9dad70f5a, 0xd03b46b1267d246e, 0x819f6808129f952e,
        0x532a1871ce163fbe, 0xd1fb2dd632e3c763, 0x3cd0a4675c75461a, 0x1203be0a8c286ea3,
        0x5254b57c68e07e0e, 0x4b3b51055fd96351, 0xe94026010974f4a3, 0xe3aa26aef6bab9ec,
        0x4012e0a60479936d, 0x456b1b9b3415b5f0, 0x3af77e19bdddebe1, 0x78116e8877316c0e,
        0xa82dcf54cf7eab23, 0x7089e481c098719e, 0xec6caa4d82331ef1, 0xdf300c59a2fa0c26,
        0x95050bec8df0d59d, 0x9f264bf2684a33ac, 0x6a1be66c879176fb, 0xf3ec98b857b98ff5,
        0x9cb5c7290478715f, 0xe4f3acb82a951b0d, 0x34555b5893e69354, 0xd71e58c1b6b70f51,
        0xb1bd51752a1d8b74, 0x815b57f3788a9bbc, 0x4778df76ac8364b2, 0x9ddd7a8113a4daf1,
        0x29ef779170132d5a, 0xb33a2893dbf48435, 0xe24e6571edeb9e4b, 0x58a08694d57107d5,
        0x78f2e8c617ff33eb, 0x150bd5f6e6eacf86, 0x93ff80f961c186a9, 0x0d24a7b49cec231d,
        0xa65ad22cd2959e42, 0x3b1c24af3cc1a4af, 0xaa4d3175623b6068, 0xc848ff35de87951e,
        0x3ddfaa0a04107ff4, 0x35d186e44429af19, 0x04ce64bfe20fc6ad, 0x57b245a2172bca2e,
        0xe2c20e715ce727f0, 0xabc7bb1e801d3001, 0x06e59457a26609cd, 0xdd924bbc6839cc04,
        0xc701a1856c946c0d, 0x3be31aea86225c71, 0xc05e18c38789c3b7, 0xe98e74d7703eb1d2,
        0x49b25e5e328b8af1, 0xa47e99b2c54f14d0, 0x2f6829e3ada9d3f8, 0x239913187721ca8e,
        0x7012797945e23043, 0x795b0696e20f5613, 0x833078cb56ff0e98, 0x906265c3bfc83566,
        0x756344596331678e, 0x72469f6aff47647d, 0xc7c848ec29b47516, 0xa6fad25f914f87c4,
        0x727cb126b867aea4, 0x8739566f16737272, 0xd2872d6840f06206, 0x97fc5ab66ebd50c7,
        0xb1971de29c5bbfa7, 0x123258328874abd1, 0x4c3fc1308f671f13, 0x557b5e3f6b2e077d,
        0x12749e936d8541d8, 0xe078a858c4c71507, 0x15f6b0bb180b535f, 0x59c82616a6a29e98,
        0x679e67a88dc24371, 0x17dd6d7412c022c8, 0x92cc886525ad1965, 0x6dbf608248af4357,
        0x190a4860ac2a2e0c, 0xc8bf19e684b3c379, 0x4cab3151e10e0f77, 0x52e5f1adf75b1a00,
        0xc63fc2815a1c926e, 0x510dc7713b18d294, 0xa6080e13fb29b19b, 0x77c72d10b5862c51,
        0xa0a24ad2ef7fdad6, 0x9e03e357abbba2e0, 0x6898fb312e8f7ef7, 0xb3c427239b72664b,
        0x4fe486c328ba851a, 0x2c5ac6392d79334e, 0xcd047b81562533fd, 0x45f44bd5c34441f3,
        0xa7b233d4aaf6c182, 0x7fecaf3a0ba66988, 0xd17378b03c58ab92, 0x725955fc0e2e6a7f,
        0x3aaa840699d490fc, 0xb2aa8142345163b3, 0x682101ddf9716623, 0xa61506a8493dfb56,
        0x317093cc65532b51, 0x65623ad242935fba, 0xd0289df5aa4b7db5, 0xa7d9b4707b47cf1f,
        0xc92f34a5236cbfea, 0xdb5f0b1a7d13a23f, 0xf4c5e564ee5363b4, 0xa5cd2180120dfd73,
        0xb4b8926852ba7caa, 0xe98f4f7be60b1c88, 0x09fd03c2d5c67731, 0xcaf64f60570ac34d,
        0x26a36032798ff0a6, 0x6be357e7c57feeca, 0x66cd5a1d92900e29, 0x38cbcd30c393eb26,
        0xda36e794500fbad2, 0x6e3469e89fc88717, 0x75159b8f662a1695, 0x1692c8125972fa4a,
        0xe0dfa14117c50b5d, 0x2505c7ffe358b597, 0x5eab3dbc1660af51, 0x831e56687c7be905,
        0xfc7047ebf7f30476, 0xf9ae4f4603a1055a, 0x08271eefb5122795, 0x2b5b360274284d08,
        0xcc85a53a0ad81e7e, 0x56e90310795d91a5, 0x8eaab35ac5f35bfb, 0x7185ab4f2f9c5f35,
        0x374f420dce56a2a1, 0xf42104099a0a11fb, 0x497de678549d34c1, 0xbfed454faaef4619,
        0x26b2dffc1af582d8, 0x90efa01f8b7aca14, 0xf8209a40134370b0, 0x25066c6c06535fc9,
        0x29029e0ffd1bbb11, 0x8ac35fb8a1215470, 0x01c6321fe2ae0777, 0x16812bb48f8ad463,
        0x1b8788cadeb11155, 0xfbb3fb53b060e782, 0x3bfa47965100ab06, 0x01db731afce94ceb,
        0xf29fd27d929fc488, 0x3fc574d591a658d8, 0xfccf4c53a03975b0, 0x3d96f79a81babf43,
        0x6743fecdb62f7f8a, 0x8fc199f8b16b05a6, 0x618ddd86d1566e36, 0xe8b3b3df79a54186,
        0x63d6250376a31f46, 0xcdd7fadb11f6f528, 0xc67f9ae1769492e8, 0xa2040cfab7f17b13,
        0x3e26a1c29ecc6356, 0xd2ad9a692c78c86d, 0xa3bc9f5f402db696, 0xd8371ea9767eb110,
        0xf1e0f8590e27b5fc, 0x4e274314e79b867d, 0xe0ea15c5e5299815, 0x1b469bab1774b1c1,
        0xcc47dfd156a02b8f, 0x2664f3ab20b819e4, 0x1cd19a117df0775d, 0x1abb11ef19bf8098,
        0xd657c679b0a5c77f, 0x6306588d73c5281b, 0xc59e2abbf54010ec, 0xff814e7d4d7797fa,
        0xbbf89c991fc28ca3, 0x3753fad2cfdfd5dd, 0x1360d2877414dc1d, 0xe3627ab971d95a9e,
        0x38fa60b04156e3a6, 0xf4bf0531483864d2, 0x186560b71919f51f, 0x4e76f87900773540,
        0x4cbe7fdae2151f25, 0x7c5268a8998ff0dc, 0x818894c404c66383, 0x93107f38e623a5c2,
        0x18031271fcc4fe35, 0x199970cdf9a7472b, 0x7006d3501475e22b, 0x3055716f694a20e0,
        0xbaaa4d2bed3cbb10, 0x376a79d22c32eec8, 0x13b984724626baca, 0x96f21a331680bcbc,
        0x6a8e3614c79da17f, 0x76de42a0f930ec45, 0x31495c9e3dba7d6f, 0x673327c435926335,
        0x4c1d692ad3fe2155, 0x8b601fbaf55fbe83, 0x320a37b9b883cf95, 0xba2e774ea29b2477,
        0x341f73deb075b432, 0x2919d9da405386d6, 0x04d6a04c65e57ff1, 0x9d67cb11a274f0c3,
        0xbe2eebf14f0c00b2, 0x0659cadd0358210e, 0xf5db4b1322eec8fc, 0x877703a813a47553,
        0x8e28b4ed162a02de, 0x83b35d8aadf4e250, 0x0f908d148597436f, 0xa46c9c0c7ce5830d,
        0xeb26438744d24d01, 0xc145358e7661a77b, 0x09a77b70dba1eced, 0x6496d668b8b5f26b,
        0x53143dc31449dc97, 0x60f64c6855042faf, 0xaccfc8680c3d023b, 0x215eff8da25c71cf,
    ],
    [
        0xe4d9cab1c0d41a94, 0x40cee5ae3e611940, 0xf3d570b8d9b429c9, 0x0c7d59054f831d0b,
        0x868c672bf4ea7641, 0x9d237c2d1ed8fed0, 0x540af9503e4e2088, 0x8348ca15587feffa,
        0xa2253bfbd4dc3277, 0x958da4703e8d5eef, 0x9b9f0c053c95fffe, 0xc27d18472ea265d2,
        0xb68de35b059138b4, 0x58c96a919b2223dd, 0x2c7df9fd83a5f52b, 0x74387a1bb2b806a8,
        0xf8e07d53d75d7785, 0x756f0f543ee4f7cd, 0xd170daef2bf2a099, 0xf80b787b728429e6,
        0xa772e242ef03ee6c, 0xbcaafb453556d74f, 0xc45610f67822dd37, 0xa0dbc3819ec64698,
        0xc7c23cbd13e0574e, 0x9a988d1ced2ea3df, 0xa6e776471ccca008, 0x1ff29a09f810812f,
        0x349812ae9ec397ff, 0x82140df3cec09c3e, 0x3bf90bd5b5654233, 0x88a686430d7fff59,
        0xd84fa26f690ce2a5, 0xa6e7fa540463ac73, 0xf1cd6216657560c8, 0x871a832f02bc97fe,
        0xb13d80625de38e2d, 0x117a63f277ad71de, 0x16398af3fe4d84df, 0x19cfc8821b96672b,
        0xd39bedb7052352e1, 0x52704cbe7dd34fde, 0x21ad2c8c0ce56c13, 0xa14112875df66852,
        0x49d598cec7088eb2, 0x119b3c4b4182b9fc, 0xaf1d0863c6715544, 0xd8594800da0723bc,
        0x0a1f2361815f379c, 0x5445e3a20e78191b, 0x1a791f9b2a61b8bb, 0x0bca9585910a966c,
        0x78121697f7692947, 0xb9fd8ae4e321c228, 0x26c8a9b43f349b26, 0xaea8d0556b1fb104,
        0x59f36add674832a4, 0xb30780c3ba64d50b, 0x6882d15e60a57d0f, 0x954fbd835cb7623d,
        0x184e13954fc9b14a, 0x40aaf88f624e9ae2, 0x32bcca970c34363b, 0xcb52edc2023cb0df,
        0xc38b202a9e60f7d4, 0x4e2d9ea90aa090ec, 0x69460116c5ad81cb, 0xfaaaa26c2d47d4fe,
        0x4fa90a82d94243dc, 0x69b4ec804e0c6f10, 0x8fab01d595f04e57, 0x585d07407d69e4ad,
        0x3a0143074691bc12, 0x09561898d3c80414, 0x8f02145131acd6ca, 0xec0789c62862781e,
        0xfc44bf56d46e68e3, 0x912fc79551461b94, 0x314fc7c3cc062097, 0x14efa300bad5d0f4,
        0x3edf19b737614325, 0x4337ac7b26e4c865, 0x3920d87aae6ee507, 0x896b6ea53dd8c4f8,
        0x888bc969fa009e67, 0xbc216224eb4c7ea0, 0xfad07fab98258666, 0x770e4d111ef36dd2,
        0x6e06e2cb439941b6, 0xa3f50efdff39d3df, 0x58e4cfb69dd71746, 0x56b64acb15e9b102,
        0x7c78812f330f02d0, 0xcd34ca30539db03f, 0xd0a17969202bf534, 0x82b9219367bfe743,
        0xd4cfa19fe01a4637, 0xa0deed89c77b19e5, 0x099eec2fe5068361, 0xa14b33268dc7f1f2,
        0x54ea36849b43c5d6, 0x1cca30d0c94c8c82, 0xed752cf8faf3e5f2, 0x2759c76b379d1f57,
        0xb04af7f2d719cd43, 0x0fb7224a2926bb6a, 0x13ed2106b15f6a2f, 0x4e9d333ca30445d3,
        0x7a892468e341047c, 0xcab6659127b5e101, 0x34dd65c11fd71505, 0x524452dff3c8381d,
        0x9811607e01ab64d2, 0x134dba0b8c80db2f, 0xb29b31b73eff4f21, 0x80385b476f12c20c,
        0xb9166739bd9f5ed5, 0x4a46bd2d360692ba, 0x39387f7eb4e528ae, 0x2ff339a431fe146f,
        0x7b6d38022891e4e6, 0x163283457acb4fca, 0x52142caf167612fe, 0xba8b30070b83d55c,
        0x651a0c29c1969b8b, 0x6499b3f5f5f6e5c5, 0x7a9cef10b40e8157, 0x08773a4dd5a24591,
        0x2bbf6b179336116c, 0x73d167ef1b926e42, 0x30833a082f6825bd, 0x5ac2859985042e12,
        0xbd82913ef5eab489, 0x11f83283e4648395, 0x51bf909aa8c51a67, 0x6fbe5619885a0745,
        0x415aa5b2ebdef616, 0xba6b731c8bb74691, 0x5fee2961f9dba549, 0x0a79ac1f5d86a60e,
        0x71567daaff11f76a, 0xc18ced632df3329a, 0x6c3195f8c5a3113c, 0xee7e442123a0e9e4,
        0xf03709b0357946ed, 0xf94596c335b9c3ae, 0xbdac1c8e248158e3, 0x711eef39c7d9fe06,
        0x0f06ee834893e1f0, 0x73ad1043234a62c8, 0xac27001f87259c1b, 0x01d179158d56bdfd,
        0xa8aebd2cafa39c79, 0x418a3627ec1d7614, 0xdf649c98c1fe84ae, 0xb5f6d4d45b353184,
        0xf956700b7d241ea2, 0xf07cf030e7dd0e09, 0xff373b8bc97e02ba, 0x1a8b86cfc2ce06f9,
        0x4807fb82cc6fad47, 0x4e0a3396ff218725, 0x68ef58fb3de78037, 0xc9bd8b4187f78ad1,
        0xc0ad58d7b1d6521d, 0xe5fefba92f05382d, 0x746a4339b4cf0e1c, 0xa6cc7a982269a514,
        0x702143d4e92956d7, 0x0d58bdddf2b0af92, 0xa217b5f69453ce96, 0xb5a26c14917568a9,
        0x8e69b5c407cb6075, 0xfff2e9392ab87a02, 0x74d55c2204fed293, 0x846dfa02138ca980,
        0x31841038ff2c75cd, 0xe9925a8794002b55, 0x2f97803aab7812db, 0xf63a1605a4b30374,
        0x58d9a4f4b64b20e2, 0x91d5396ed05b84b0, 0xa74bea435eb46726, 0x3d7ef85bcf63c413,
        0x47b313bc084fa3c6, 0xf64e01fd84b258de, 0x532ccfb1463d39cc, 0x71946b92e2b23256,
        0x05687179c9d5bf9c, 0x01fb0b8e98157f61, 0x3d5ffc516eaec234, 0x0d9a6aaae12a9072,
        0x2f9aa8772e068f13, 0x7fff36df5d5112a3, 0xa297122a7c99f36a, 0x7eda370b7796977d,
        0xceebc159e966b39d, 0x6f4636a7306e152a, 0x01299f5efd19beb7, 0x04ee9ebab10b24dd,
        0x1008a44a16fe065b, 0x6b7355cd577f2ef9, 0x0521797517ea0456, 0xe325b563130670a5,
        0x9110e8496b17cd2a, 0x79d6f75f88a002d0, 0xf130cef92c25a629, 0x504ae4283b6abdec,
        0x567d8c0dd12105e7, 0x066fd3da4d6aa5d2, 0x99033a9a05c54e69, 0xfff28d03ebced829,
        0xf28f0d3c6b89e124, 0xa644eb6a2d95ff46, 0xa9bdc6a91b849745, 0xb48153cd75eb9947,
        0x1b859e2bedede735, 0xafc1520c3d4fa3e8, 0x2e308ddc90db4388, 0xc3c9292c1c593774,
        0x864b1809ebed08be, 0x7b08a24256ae3487, 0x4606de54d31dba07, 0xa38414a0f9ad6134,
        0xc9d84b48f933226a, 0x7cfbbd572edf2704, 0x83e0d34ef3e399e9, 0xd378d02a0b59b9c5,
        0x182f882322085236, 0xcc9e89169b4b42f1, 0xb8bd479a39fb6018, 0x1bc2015b683b1413,
        0x53498722a0e5b847, 0x2f986a070e9cad36, 0x93b1cdc764e0bf9c, 0x885f1857e857a6ac,
        0x83d066fd8c37dc04, 0x1c10c40deec5949b, 0x31b1e50e86d2f3be, 0xaa77a80ce2d32e56,
        0x8751674e474982aa, 0xe56fa2be4293c71d, 0xdbf27bae880ceb4c, 0x2f91b24c104b4783,
        0x291898d9c9fcc93c, 0x266e89fdd6b058d0, 0x0b3e82dc9150b043, 0x1f0f57c5289a097b,
        0x90003ac66584c9c0, 0x2a25873e35dcd2f1, 0xcdecde85e5a969f3, 0xe0a2a7bffaf95492,
        0xb2f18ed1ebcd85b6, 0x070438f333827220, 0x7d7b41a55f23d481, 0x4261f56f5bf5586e,
        0xf8820627a4bac9fd, 0x25587745caffa3fb, 0x6fc9b84805c3abdf, 0x9f0bd71d95c0be63,
        0x31fe4f5f35c51e2b, 0xf70fd23a804539b3, 0xdf703400b8f15aeb, 0x5c27075c0f4c12d7,
        0x4004a90a16dfa94d, 0xd1f416edb8a98efa, 0xc0591906d13a6a4a, 0xf47944606d33bfee,
        0x7c4027e369573b93, 0x73d7a089f44d3d84, 0x10c8cc5b70c8dd70, 0xb8c06fcb927b1aac,
        0xecf6abc0a9383b49, 0xce1a5b7e43c8d94c, 0x4513bdf041872197, 0x5d7823b84ad40c88,
        0xb3e70ef871f5cbc5, 0xd545b60a0a3373f8, 0xc7ee721604c862b1, 0xc1d17a54fde98390,
        0x2f4857816b4f5465, 0x741305af891a9c69, 0xc2641332e9362400, 0x167810362c700292,
        0xe4cec3dfb9eb1635, 0x9c0fd607bf5a6549, 0xb045c50a8114562a, 0x7f10261028e2c39f,
        0x9b7c530e7cd2c9dd, 0x8114d0ca4e8608c5, 0x3a2a14c8f9a17095, 0x418a32a535c0dc14,
        0x9d50cecc2a08449e, 0xbe939e139fe716c1, 0x3a9a045b57dffed3, 0xc43b11781bf4be62,
        0xf0e8edc5574885fb, 0xc85549d480e3a6f9, 0x753d894dc4fe8e72, 0x05fbd3ee84b1f8cf,
        0x4fcc6d026ffff7ac, 0x9836622430aa1242, 0x876148b9c09594ac, 0x27573fbc419c86b5,
        0x2f32b55b52a2523f, 0x72aca4d2a9d009c2, 0xecb8488745e9db5b, 0x9210f5b9b3ab423f,
        0xbce6509ed6c6065a, 0x6fb142d7b2c42e38, 0xc69ffac9e2fc799f, 0x82f2f83b5bda1160,
        0x9718c2ddbc802849, 0x36606813ce4b39da, 0xa89c1d1dd1bc4480, 0x32ed3d914e0c81ef,
        0x8b662764e446f1ef, 0x7409012f50ab0b43, 0xe5276c22eecdfe73, 0x184b040260a08106,
        0x2209cb9e8a593cb4, 0x224f7f4ec5a83504, 0xefe952985f2e24b2, 0x7c4601bc8e821005,
        0x2fea6ab1c79c1725, 0x4db0903ab3cdb981, 0x19c709872d890394, 0xacf4acdc3c51c605,
        0x0e24f5418464785b, 0xd4a1293a11590271, 0xa7f5ed0290daf370, 0x126e703eec25bb10,
        0x84ee945a1eb9bf01, 0x98c78aa78c058073, 0xecb7a35f01cd40d3, 0x55e1c85c323b71d3,
        0xfe9c760bcab329a7, 0xaed496a8614c0fc2, 0x15634020d3f0f889, 0x40a5a1663b112bd4,
        0xff0f7e626cad191e, 0xf7a0572cd4edaa10, 0x32c1541e0012f591, 0x0817eaf70fe2d6fc,
        0xec3093f0624c81e8, 0xe87064d45d6f8296, 0x92dd984242d265e5, 0xf0948fc93ae2f0c6,
        0x7dd65ad6ab49fb60, 0x0b1fc745d189d68e, 0xc123acac7b8d8915, 0x34805c20480856a0,
        0x6436a001f44818e3, 0xceae65b938c935b7, 0xc7a360beaaf9f08a, 0x4c96979df53d85af,
        0xeb85e78517ab0b68, 0xbf2b9c8095e38cc2, 0x2b46ea98a5ae3c78, 0xd29419757bf2b0be,
        0x4d9418ac8b5187c6, 0xa013e913322cb14c, 0x46c6cea3f3a3916a, 0x5c1f40971e81e4e1,
        0x1afaaf747edfb968, 0x833e9deef225a4e7, 0x73aace3b8900b56e, 0xe7486807b70216c3,
        0x6ff8d2a7e85f2025, 0x0c1219dd02fb0741, 0x3dfd84e15cb7d0ec, 0xb9aa656d2fd424a6,
        0x39af658fb84834a4, 0x93c9fe18994ebc2f, 0xd047969748921338, 0x433eea4d6fea66e8,
        0x9a5a26982870ca08, 0x5285c91ea69a93e3, 0x9373f36283f32199, 0xb8c8b14c46f058d6,
        0x6c0e051e71699f5a, 0xdbbba56363c50e65, 0xa9b2725b8ac8c30d, 0x1b398053b09cfa61,
        0xaa78ec63c7417931, 0x5ceff0183b47bf2a, 0xf045275a8915d922, 0xf1ecbc604c2ffae9,
        0x5856cd8583afad40, 0xe506ae6f6691eb18, 0xf5fcc675203d2d99, 0x782fa52bfce336d0,
        0xd2715c8988d30ea8, 0x2c4d59344658e9eb, 0x1f8b7158fc4c304d, 0xeae22fd3a7bf902f,
        0xa3fadc6d28c26cdb, 0x0ab8b3c7333ae8ff, 0xfbee538f6fe21c93, 0xf47e180f48d6dae1,
        0x425e62fa43928852, 0x355e16f52a6d5481, 0x76c1855a05d42aa8, 0x84230bfa63bce926,
        0x990697bef028d276, 0xa7177049a97a85b4, 0x8198aadd5a366d79, 0x44a63591a6a704f1,
        0xc1f027c1c282644c, 0x47c9394c12307b05, 0xe0e4ed9b31eb91bd, 0x40e353cc4da778ea,
        0x0655116386788a28, 0x0d91be749cf52022, 0xa8f7cd87b60aa324, 0x1b3f930218c3034d,
        0xbae0ceeddfb00461, 0x052b1407330af8fd, 0x6420155f30e99527, 0xb6f40e9708eb4b26,
        0xb8a22ab78d74e26b, 0xf60c449137adde62, 0x74b5163fde6b0399, 0x1eac3587c4591cfd,
        0x70e99cb3d2a00019, 0x8a19cf30f25ac201, 0xc1fb78e1383dd581, 0x43999be4011f30e6,
        0x2972b75370d529de, 0x07f1cfec992e8475, 0x4617258aa2cf4c37, 0x8b7a685ac72036e6,
        0xd2ec31ee707b2dcb, 0x689fbc66208fd227, 0xc89f61c277c0b1e0, 0x63c615d5f7e8d640,
        0x0f919d4494b49185, 0x90e17885104b04a3, 0x91a682640a4e061b, 0x1f3fff4fcae11651,
        0xb5cfe625cf68f352, 0x4da13aaadcb501d6, 0x42f3493d6d653c44, 0xc76c917f67221924,
        0xf94a115127d93da8, 0x6b572ca3c0d084ad, 0xee449588ed0c743b, 0xdf7f55b1d5dae483,
        0x42d212517cfccfbf, 0xed9bfa73ecfab5c6, 0x79146aab298a9726, 0x7e3efc579b688173,
        0x7f9609884ca89b88, 0xaa69c7aa1d8e9d9d, 0xabbf3f21c3d4ddea, 0x6e1d078f483621d2,
        0xaf81a9ff1f05a312, 0x51803651d1f15d39, 0x77016c291b7f0246, 0x8b2fb28228eef62e,
        0x7037a74d575dfc1b, 0xf5a8f5ecebd4e536, 0x57ec19592ba12ee8, 0x6d80dd63a84cb0b8,
        0x27945ae06194b51f, 0x8f934639a09d3afe, 0x23079179e8ba47cc, 0x39d2e6bdbe17e7cd,
        0x144c101c4ad8f830, 0x529dbadd7d3ec769, 0x03cd312e68866e1b, 0x9423465f7f554182,
        0x2f6e990b2b74ab51, 0x6b038acbc35f0f40, 0x62ec7dd1145535c5, 0x07febf09a34df03a,
        0xda8792d511fb4214, 0x6013f31f43ff7fc3, 0x077cab67abc48200, 0x1713f457574c0c9d,
        0xed6a7c5f51c8c8a3, 0x02e189a1723c422b, 0x8f6109609f180405, 0xa21349cacaa6252f,
        0x7751552477d03987, 0x3eb3338af4df75a3, 0x069628a080e511c5, 0x283169e60e66d495,
        0xf0da5be4e7f8a61b, 0x130e4ce0ffb8f2e4, 0x1b7ba1a917376a3e, 0xa8aab3bda890719d,
        0xf65bff0d08218b2e, 0x377a9d791ef83a8a, 0x554e8f16c6f38a92, 0xa176462715fae3d8,
        0xdac81e596e277971, 0x8266f2f7e4bb09d8, 0x7ada1d37b7656544, 0xd567ff98bb59cfec,
        0x3b80fc515dbe7308, 0x6a5fa420654eb6ac, 0x93a6c41e3f410bcc, 0xfa71c3fd6b1c243b,
        0x90d0e2ed6e6b0caa, 0xb90d0a5252e3dc24, 0xa867e4db6c80e27e, 0xd26c1d512ddf3cd4,
        0x751235c6a05fe7a4, 0xf10f66847b76cd6c, 0x6d3b82a348df73b7, 0x9554210e86ef2cde,
    ],
    [
        0x564d6e859204db30, 0x1bb400d355c9bd11, 0x5f2a3e9a7a82d20f, 0x7e2c5852126506cc,
        0xc23d9491dfe5f6ab, 0xdada9bb90f88095a, 0x7d892e3a4037f17e, 0x4ade066daafd6cef,
        0x8e78d2ed387272fc, 0x76f54954a2e23074, 0x0ea9278e01400b8d, 0xa7cc8bbfdc8db00e,
        0xc4cc7aab4bce0fa7, 0x66d46ad3ddfd45ed, 0x551ba4cade6d4c38, 0xca0ed50cf1edd62f,
        0xe16ca42aec027bfa, 0xe1ccb6c1eebdbcf9, 0x9a3ce11709110fe9, 0x19879e780a3e3684,
        0x59657aab1b9784d5, 0x8fa225557fe2ffec, 0x42e5a186d8d9768c, 0x58234c89659604c5,
        0x29bbf3b71c1dceef, 0x1fc3f7a259c437e3, 0x70cd64676f269922, 0x78c80f73f37cc6b7,
        0x747daf46a4fb974d, 0x0094e7c6c6f80fb4, 0x6221871bf3d4db0d, 0x496c93634626e343,
        0x1d559f4ace95134a, 0xd82c5e7948ab68b7, 0x13800a76ce3b07c7, 0xab0a80a5b87d0ede,
        0x8f85f872cdf1624b, 0x98f4ef66d1c02b67, 0x4af093cda3fb0fa1, 0xbc257ccfc3de57ba,
        0xb4e3bedfd54776bd, 0x98fd949b3d3ac848, 0x58cd793d02619258, 0xe46e977fb8e15a20,
        0x2e3c91a9dd45feda, 0x87c925fc74484bc3, 0x42b0ca549d59a29f, 0x8dc18aaae4fdd396,
        0x0cfac5fca9ebda1a, 0x89b5b355cb7d384d, 0x3252147d0ce7238d, 0xbb7092e26f90249a,
        0x899331f61daa17ee, 0xfe47e04f62fb1c56, 0x7b7ff07702204867, 0x38ffde8ff94ad1ab,
        0x56c0f44098d1e26b, 0xd06bd227d091397b, 0x2feee9d720e1899f, 0xb57700410e85f036,
        0xfe3624e658e598f7, 0x8eec96c8dca2e393, 0xe2bbbdcd7cecded6, 0x4b7fab3cc064f530,
        0x139bb9282aa84cdf, 0x8402465c06fc2851, 0x399e015c191011f2, 0xba94aac708b3567d,
        0x42fc362dc1a9c0af, 0x7155c28f919ce305, 0x81fa98415f91a4fa, 0xce59c8def8c1decc,
        0x9163a377fd8a0f13, 0x9039326417526081, 0x9552e7456464f584, 0x1c51f5e43aa7fc1f,
        0xd4a05b696bc940f1, 0xf0325189e50a2f01, 0xa67be2474f52298b, 0xc3c7ae6fd29f48d9,
        0x0c88f70117603e76, 0x89ca4552e873842e, 0x8f3c6e4f48721d93, 0xec553912ee249180,
        0x6f2ce032d8a7f347, 0xc6dc3d32a778448f, 0x8cbf3a6c00f6004f, 0xa6a421adce4b0872,
        0x0995c340576f1dbd, 0x737de2e324235e5e, 0xf694ca2196163b47, 0x41d286266ab88fc2,
        0xfb775fe7c76dbe2e, 0x16e99ebc351bebd3, 0x72d1fdcea039826c, 0xf6999578f4e4c8fa,
        0x1048a1bc320c8bc6, 0xa0f117e4204d2962, 0x9bbf87d70ffaec55, 0x33576f022954a3e3,
        0xfdce003ba7db0248, 0xe8aa6cdb1f81f578, 0x130fd0570d1ea294, 0xb481ca1c293ad2df,
        0x81a4c58278043ee5, 0xd99e99d092e259f1, 0x16a8c9e7fea6eacc, 0xdf2aa89d744eaa18,
        0x5f73aa3858de0625, 0x052b634f5639abc5, 0x522b3e3e9be7ee82, 0xf6e8a9eed371c3f4,
        0x02398bd6d2dc9c7c, 0xedee32da50b76f18, 0xd446960bd57bc36f, 0x6de14155e22da86b,
        0xac9506534a77734f, 0x8a92f9e6229f1017, 0xf2f306be0c78476c, 0xb4757ae159921b25,
        0x9456a6c3f7cc7d6c, 0x4b307bf321bc796f, 0x49464a8ef2a1dbfc, 0xe1bb263e4c8d9768,
        0x15f904186d81fb40, 0x3619e36d2843ef12, 0x9ae4fd553f038851, 0x731153aede175892,
        0x9413d7ea88476456, 0xa81ba22d65063b3e, 0xfbec312a886ac8e6, 0x6905cdf4c05a3f24,
        0x04170b01127d2b35, 0x32a01e476d78b266, 0x17c7292d961cf02f, 0x3e12a24a77b96ece,
        0x858436bd635c55f0, 0x0d095055f3b78a50, 0x67f5645b12fc094f, 0xb85b782eb4ac2d0c,
        0xc77300e6392dbd11, 0xe19b95003ec5683d, 0x984131889a5b40a8, 0xff47bf288a72ae88,
        0x799418e363d5a31a, 0x4837f1373c2fcdd5, 0x60a62b4887bdfa61, 0x8eb73faef8f4c1ee,
        0x842477936b95e6e9, 0x4886fedb85f45aad, 0x9d4bf5acc1ddebdc, 0x5dc8848acc19578f,
        0x0405db3d8fa61304, 0x589a56e37a5eaabd, 0xf3bafb2d5f5ba669, 0x2126981c58ca26fc,
        0xb7b3ad6d9670c22e, 0xc555ed44aae16a6f, 0x69d9cc8b668c8022, 0xce7306f6b8648a06,
        0xad2ddaf8e3085f1b, 0x99b3bda17dedbf05, 0xf69a9ee3af2426c3, 0xcc2fe8c0c413fc00,
        0x0ad33ef71ad9866b, 0xa6f97fb3159469de, 0xb553cb13b57747bf, 0xb123f3bb2058e222,
        0x279a09634eb87133, 0x344042658d353c77, 0x3fcae1edb90f9cb5, 0xa40b36b77ff12f89,
        0xcc2b23977535cddc, 0x169549b6290426dc, 0x894aade2ac166a7e, 0xc6b58042a5dfefde,
        0xd95511d980591234, 0x6a9cfb195804d9df, 0x9b1743ceb275f5ca, 0xe16136d3b38d4ad8,
        0xd7f6304f71f3e3b6, 0x2d73dd2368b7842c, 0x48849fd57e783793, 0x856cd3f3b4d2f624,
        0x9eb0aebb14f2f24d, 0x701eaf3a7f5a37b0, 0x4d7cf25e5762d68e, 0x4fcc1d44e3917798,
        0xae762f7b9bea3649, 0xdc16fe2d2ef695e1, 0xc30664aba2f316c7, 0x335e65033d4c4e60,
        0x5c5544835a1ffa66, 0xbab2dcbc6e1aa0c6, 0x0dd5140aeda47f96, 0xbf5f559b3547f8b3,
        0x4f0f17bc04116aeb, 0x6da94459b652c4f8, 0x35af0c0e388bcc75, 0xee7c32fc44cc710c,
        0x0a414f9b5ba5b0eb, 0x1f3a377669d8b26d, 0x77c40f3cde303128, 0x32fde94b0468e5ea,
        0x0dc2eac621f70aae, 0xc46ab0a291dd97e9, 0x083a26aabb0acfb5, 0x584ddfe5348c6666,
        0x033bb53bebb063f6, 0x805874e8108a8c0a, 0x086dac657c01d84a, 0xdee59877b81fd20d,
        0x34301cf44395b044, 0x5bdef90e51704d0c, 0x13354792a9c066fb, 0xfcb418d04f28bdfc,
        0x63438f3dcc7d345e, 0x5a79da8ecca140f3, 0xcf7cf341b8ed8333, 0x7a956c64be3dbf87,
        0xc6580b2310a380bc, 0xe9d2846f2f6367eb, 0x0bf359cefee064ff, 0xe2775c8cae7996e5,
        0xf1cfc4cb0ad35636, 0xb872dbff52786ecd, 0x2d0c201f2fd70c22, 0x5ae762bdeb86a18b,
        0x27d12937296248a4, 0xf8e834cde3906d9e, 0x107c0f0e024e856b, 0x219cde82efe46989,
        0x827d333cf2bfdb52, 0xffc05a7d4d8dfb1f, 0x1df76d07d59bc4ce, 0xbf7ed78886b0e7d4,
        0x60e69d0bca7825fa, 0xfe515a22daaefd38, 0x57aaf19a9184ec33, 0xccc3bbb6fc4f3577,
        0x0e5cc99ce8230901, 0xccf638f8376fc2d8, 0xda048c4827629de8, 0x9deaa5c9d0fbb940,
        0xe725695565fc119c, 0x3b43f7dca56dbc4f, 0xc2dc3c7daf77e3c7, 0x905939291eb40708,
        0x51d7c6997dd788a5, 0x8d5a0f61ac7d4718, 0xe7b6e7597bf43462, 0x274d1d9007abcde4,
        0xc48d2262161e85cb, 0x04ed2cadffea8124, 0x3cccf4a163ffb50a, 0xb0876a8a776ce13a,
        0x7b8630892ed18080, 0xe5f43f1abe645e25, 0x0d4df31326b47318, 0x9e4b4e62aade7a1d,
        0x716c01dfc9184cf6, 0xa31783a6827ea8ef, 0x340bec90127a29b0, 0x70700e4f240e9bb7,
        0x2b58373a7d7383b1, 0x0575e3bbf5e7c8fb, 0x16d7e9a50e3f3381, 0x8ad5b9a27f7ff0a9,
        0x9d4b513b4b2ad7e0, 0x74c971d7ed682c4a, 0x4929ff5e11d16ebb, 0x271137e936731fdf,
        0xbcd05461625d3909, 0xe7e524f43d442fa7, 0x4af7878c53841493, 0x2452e63f20b5ece3,
        0x98ebfd98f7fb5401, 0x46ad596de2d1fdaf, 0x72e0b81c923fe808, 0xf2e748208d6442f5,
        0x688174dd942120e5, 0x3d8b0d82a12463fa, 0x34b2022d9997edc2, 0x2f41e27dce0ce9f3,
        0x4ea226f592087c3d, 0xb34c93d083d46d0f, 0xb8e636b7e8d16f19, 0x7b47e678bf09d221,
        0x2bd8d4fb57db1e96, 0x56253c3257592d3c, 0x957e5be1c42bb661, 0xbc309dde3fe6c6dc,
        0x23bf35ebc99c656a, 0x33ccda6d71bbd3d1, 0xfd63a2ffbd631fef, 0x58ac87b8e9a316da,
        0x3601c6d1ed71e119, 0xbaf2f4714e9d92c9, 0x392482178574a3ce, 0x35930c5c9e044a5b,
        0x8f1a95c462424bd7, 0x8a63a39cb4d87ccb, 0x84406a115e50711a, 0x9f583e4adedfdd55,
        0x943350f6140eaba1, 0xebdce7a5e14de014, 0x005354dbd3bbac67, 0x54a54ba3aacf50e3,
        0x3e60a04cbe527794, 0x9435defed0f3f4ca, 0x5eb2b691a980cdf6, 0xffc4b89a1193b3e4,
        0x053b809846a22e97, 0x0cf9eea3ed8b1a37, 0x71fce28479daf6e0, 0xc9b8ae9fb7a10472,
        0x8e8726a1cf5a21f0, 0x5018a0ce180ce636, 0xc37ee6cad00fb8f2, 0xa8a566ee22241ecd,
        0x589aaf20d14e5daf, 0x623205334df84be1, 0xe2c9ec78e6685ec8, 0x56b8b9d61fda3088,
        0x914dc877895ceae7, 0x4d69b7c6bdb1af2b, 0x955714a43d087445, 0x837ada546a63b06e,
        0x5e7b9d366030a376, 0xee7dd406ee40b0c5, 0x017795ab59947693, 0xcd26f4188fdbb3f9,
        0x19822167a6daee1d, 0xafedac2da14da289, 0x91f08b63a942ae7e, 0x714bc7db88d98bc8,
        0x2d7b786885f23129, 0x580d82bef8131f8a, 0x3b1a8935b3bd5aa1, 0x17be9422b632dddb,
        0x14fd494bfcdb31a4, 0x914e009004126f0d, 0x1e73b868c526d6e4, 0x0c481d854dcf6378,
        0xc7dd05bdcd70c93c, 0x63fc83d80875daf5, 0x57e6f4b5309c6508, 0x0cb49ae0f4c98e5b,
        0xe67c379fb53aa3c7, 0xc0cb137a894fadc6, 0xde88f403443160ac, 0xf5251e1e515c2ace,
        0xd1813026e1976ab7, 0x495fbb054d570c07, 0x3e6ae19d1dc771df, 0xb4f9d001bf0d1eb5,
        0xcfb64da217753ace, 0xeac76a4af952c038, 0x8df62ec212c01222, 0xa8294237d4d25c91,
        0x3d9b17720d64df1d, 0xf354f8b25ea9cef3, 0x9d0df2b703b6e82e, 0x599cfa2b4ac6b8a0,
        0x5e175a13f6f21e23, 0x3dec5f624034acdc, 0x0cafd1481614f8d3, 0x9ea45133b48c5fb2,
        0x9fe19108e0623c93, 0x0135085f7f606fa5, 0x62c392fb1ba1facc, 0x66e5645ab9ba4570,
        0xdaf53be47c578fb0, 0xdabfb1ba500594e3, 0x7ca7b7a4204e25df, 0x6afba7a8bd2f804f,
        0x27d8ea2a8c025be8, 0x10854f102aa9061c, 0x2d3ff71f03858705, 0x6632e3be8d10e8ec,
        0x536c441fa1f6653b, 0xc34b0bbfdce7b2f8, 0x593db6d5ad906eb1, 0xb7456b3e011e861c,
        0xeee4f96f7b5f81ca, 0x14ac708021a2eaf4, 0x4df119aecd8442cd, 0xea3eb4c64c43d89f,
        0x696b2ae8390bff2e, 0x2874eb38af31dab9, 0xfd430880a587c273, 0xa58ce980d19644ee,
        0x9c69af86543514ef, 0xe6522e5d55dab556, 0xb69b57089222eaf5, 0x853bc95d6ebf89db,
        0x7d71d20269b98eee, 0xd17838fee39ba740, 0xaa428ef3876663ec, 0xcea912c10da6be30,
        0x23b0788795090997, 0x6dcb7d2793d3d50f, 0x65c8445b902e5686, 0x01f8922094311e6d,
        0x042f89d8f90e0481, 0x71aaeb18aef960a6, 0x3f7bedc6a81f1e24, 0x4987d1a64556438b,
        0xdc8a32dc5e871ae0, 0x42a30803bd9211f7, 0xf6fbf86464841008, 0xba6224a6cace473e,
        0x4133f831991c3c9b, 0x21e289f8ab31f937, 0x4228177a032836ee, 0x087f912177b48b41,
        0xa80e501c15867022, 0x073c49cbfaecad3e, 0x60af970de3cfafa7, 0xf3f3c5b9d4fa748c,
        0x8bc0e7416fbf7969, 0x2891eaa0e5b53383, 0xacbce197c0af11a9, 0xb54dad8862d14158,
        0x2f5bcc093fa3c40e, 0xf2be0feab8b2c8a0, 0x64227c0f33206733, 0x68f5f40da8f06839,
        0x594e5b824fa48b20, 0x59969d8161090db0, 0xc6174fdc3f7d19f8, 0xca2b3229232d61e0,
        0x052bf5d9d74e189b, 0xf8a3de5f69b58c3b, 0xb066bfaea18da892, 0x77e28d9448cb742a,
        0xf785a4f8ebc0754b, 0x70e929e8428f5ead, 0x1e7c2f82c5070eab, 0x72aabbaa69dc21ed,
        0xe0bd464a10d5afaa, 0x0aaf430ca30eb4e6, 0x07d8d288bc4af4e6, 0xb6876fb050f3a172,
        0x0716bad067ec5b86, 0x645a02a90c54fc30, 0x8f75b5944aa84505, 0xa9aff4eb177dd490,
        0x88d470071bb0b415, 0x3f94646458beb26f, 0xdb1ca9557b32a1cf, 0xfb7e537c9c69e047,
        0xf6ccd628f88af5db, 0xa0ed9910afd9bace, 0x715ecd50d24dfda2, 0xcaa5d14d27e7451c,
        0x044698cc26080ff3, 0x2d1b5709b61cd918, 0x61b213e01b77f122, 0x1da0a323a066b849,
        0xdfd435dc35f3f150, 0xeb497bca053536bc, 0xfaabd3091e97cbb2, 0x91cb844dbe62d6a5,
        0x216c08ae18d2c218, 0x51207d3eb5b39168, 0xde16cfa52e3b1822, 0x8f0fe052a332f84f,
        0x6b90a0084134ab52, 0x8f4601e5ac77472c, 0xed1ff363e920ba24, 0x763593633157c6be,
        0x1a7896b96178647a, 0x62f6167f32d3935f, 0xbc9821f5ed075d44, 0x25dddbc0393e092f,
        0x80f9e5bd4fa0dd18, 0xac5e05161bc72a35, 0xee8fac37e9801d86, 0xc40e7725eb38d74b,
        0xecaf149701f68017, 0xec8c1f57b46bad46, 0x721ce8695ebd1883, 0x78e8867f2ca78fdd,
        0x131018efe719cff9, 0xd629dbddedcf6de7, 0x35fa3e805c4922b5, 0x9250885fb3da2a84,
        0x74b7b30d8e26aef5, 0xa392d3e3fbce308f, 0xb909614fb342da7d, 0xe838649be8a1b9d5,
        0x2bfed2049b14fed3, 0xb089b8f7f157248d, 0xca5bed9aff4958be, 0x642101a8b0b5cb38,
        0x3e341bff40cd7173, 0xbaa8044559ca19d1, 0xdb090711367a8320, 0xc795b138ed98a2c9,
        0x8b21b116de1b78b4, 0x44adf585bdc7716e, 0x32ca4b364eb7cd3b, 0x5d1da32ee7fb6de1,
        0x137c452de7cf120c, 0xb74342f52a050dfb, 0x6777d19718f1c7d4, 0x753692d4b4cf4867,
        0xa423a957b2147d1f, 0x6ee6772bf3f819d9, 0xeff39d829e5939f0, 0x189b1ed9c8f77c40,
    ],
    [
        0x624de6872857a1fc, 0x175fbeb0f912b74f, 0x584a16d015407ffe, 0xa8e97fb664bc0f09,
        0xf0a1c5658bfa2c22, 0x48d6d957b3086691, 0x5c06b2443350f670, 0x2b7507cb8e419e08,
        0xbefb6a4f08e9ba09, 0xb0c3156fb22c5f89, 0xc9eb445d7a13effa, 0x15b9bab750f2b65b,
        0x33346cec460adca0, 0x26b8502e9c14b699, 0x2284a612bef1d0da, 0xa24cf6acf96ec2b8,
        0xafb6981ae7daaff8, 0x5a72dc07587674ec, 0x379608613445879d, 0xdf3f4658d571c59e,
        0xa6ec0eedb1c5982a, 0x65a5f74b5bbbd3ac, 0x915f50cd3a650829, 0x404ecf12a7f28b2f,
        0xf825ff37fcd6f027, 0x02fb6c697f2edc38, 0x2dceefe655a9011d, 0xca4ca8c8713e1d30,
        0x6a94196cb49fb049, 0x13b4d1c77246fd96, 0xb896003e590e3107, 0x4599b8941abd31f0,
        0x0ef6ce561a03755b, 0xf2fab88f2286ebf3, 0x9cc0746e9d8727cb, 0x083e58898be08323,
        0xe0364bae408a0306, 0x4e287e6622e260bc, 0x3b8b3b1db6586c5f, 0x8da05ba674dff201,
        0x27b178edb0146708, 0x2e90b3e48e12c560, 0x2285aaafcc68033c, 0xe0a8ce61ec8d566a,
        0x25b17fd9ae8af083, 0x5f41c4d319c3d18e, 0x592a242edf4a28e4, 0xfffc5482cf69c747,
        0xb0ec4cfccc27760a, 0x941f02c5038004ad, 0x242140a4987446ad, 0x3c8ffb0ee513ea90,
        0x19dcdd2fe8da43d6, 0x011968ae302a17cc, 0xc3f030221a05155d, 0xb850acc70c33bed3,
        0xde1c0c5266d3f75b, 0x4e79a0be4626c00c, 0xeaff93dda1552fa5, 0x83b654db084910bf,
        0x4b4526926ad8f168, 0x6d43c503ff477c6d, 0xffe79bec864b5564, 0xdd5fee9e2d3a6e28,
        0xbd0a0d9c2ff8f505, 0x45fbe8e16e0ceedd, 0xa977f70208a82a69, 0x0b913991c953cd08,
        0xc28518c32b326c0e, 0x9946a29b26640916, 0x7557dc9df6f9c751, 0x785328d7af855eec,
        0xc6beedb8b0c1b6e1, 0xd10ece4abf78675a, 0x89b856f10d697480, 0xa7403d4b5e5d53e4,
        0xd4d5bba87b34756a, 0xf1bcdca60948a291, 0x2e7c5f4ea8c8faba, 0xd06747c3a961cc16,
        0x5f8998d973bdcafc, 0x100f9ff0db09cd65, 0xc5e496b0f2fcfc55, 0xc49e7a34cf45c1ee,
        0x58d283175ebbc26f, 0x41eb4593077bfb4f, 0xe032bdc5898a6a1c, 0x6ddc3ce17fa9c435,
        0x60a056d8a681a001, 0xcc4d43042fbe8690, 0x8799064abbbbef00, 0x50cbb994f8a13db8,
        0xbeb1eb4bcc12a38d, 0x84ea215833965581, 0x7a0dc361f754ac01, 0xdb34198d9a1da7d3,
        0x8dc768f2fcdb3469, 0xb7532cedfce83e6f, 0xa2af77fbbba1ec8e, 0xc573596ef8dc0a78,
        0xe8d8aba07a4eb2cb, 0x71a2ec994a28d5bd, 0xe4d50a77d34f10fb, 0xd2eac07f40d0a835,
        0x85a2355454ca2aa5, 0x242a86ec239b2c58, 0x850b732b78430646, 0xe41397d6c55f4bd6,
        0xd589fd8bde4215ed, 0xc0804e091d389d95, 0x1e623cdc1bb45217, 0x7748a0f4a83549fd,
        0xf24c1e22bed3a1a1, 0xc136a2a5a0fd46d4, 0x40b3f70906a02f0c, 0x91ecda3679bcdecc,
        0x46fbf7ea95f29b5b, 0x2206ff24c3e5a5cb, 0x6cbbdc6b4f7656c0, 0x76aac64023af7af0,
        0x47dc9ceb6c299b57, 0xf6fdd64f5af82c0f, 0xef1b40dccf3ae702, 0xbb581f8b60ea75a1,
        0x907beb210cc6fc91, 0x35f4c4cf1ccd416a, 0x0510e35210c60d52, 0x8eed56d4686d8ca3,
        0xeecb4fadc381bc9a, 0xf0e1aa68d9233ee7, 0x52eefecf67f8a198, 0x8385a1b37fc3bf00,
        0xabafc6f0ec107d66, 0x932ca93c43db59a9, 0xa7ebd3b8de66fd97, 0x875db0c77b8683a5,
        0x59daf0573510ef35, 0xe270e31780b8ad9f, 0x834bbae225c03cb7, 0x2e23e37628529212,
        0x02b2e2d4eac84add, 0x73e43a322aefd415, 0xfd441ae770303ea3, 0x57c7001cbd17f0a2,
        0x23ec39e1baf9906c, 0xec0fb71fb30cf6e6, 0xfe74e95f6559e153, 0xf401ba3d43972cff,
        0xac8f1e1e33e5b7dc, 0xb642934b83b38100, 0xde8fb4f12d15959f, 0xda887e3f61ee755e,
        0x92a39248aa92c135, 0x405b2491e89c80d5, 0x7fe944c20b49b5ef, 0x2bee12b2a5b0e3e5,
        0xbc136771f5e8d167, 0x9b9f071b2e53c024, 0xe877a6f3e63ab0ac, 0xa8b89523a0f0217d,
        0x0be58a91a21d959d, 0x17999d7ce0cde4fc, 0xc75aee6031a67cc9, 0xc3e988fae8901eca,
        0xe548725e1fd7d5da, 0x5528da21a7c5c3e3, 0x26cb86f57c3c01f7, 0x2701eb31610a7d6f,
        0x80dd123c395a7b16, 0x6fb42ecc0768275c, 0x50fa4b612b3fa03d, 0x4cc18d48654bdf55,
        0x56378f044b3f61fd, 0x7323a9ab18a5a3f2, 0x5a9633a6494074d3, 0xba1c8a0de7ccf4a6,
        0x4f8522a1819bffc7, 0x85db7d243d31d26c, 0x33f9bf20a0fd6018, 0xdad3fdd59b1a5514,
        0x7f3eaa05635e8388, 0x4c7f0df3a20dbfb7, 0x6e30dbdd0b0875f5, 0x049187ee21d5853f,
        0x4ad1284751f7f2b5, 0x7a8282245f7cba0f, 0x35ced3fd9ca613a4, 0x6917f2821cdae7c4,
        0xe876d523bf13c18b, 0x7070f471d5088349, 0x66203aaf328a652e, 0x36889a2778083491,
        0x72386292fa94e41b, 0xe55fc1ce406a626e, 0xec21373819f7a7e0, 0xb6e74decb09ccd8f,
        0xbc7a6abf8478907a, 0xaa61a0c5e4fe91ba, 0xc126dbaa2befe6fe, 0x3d1bc96890a597e9,
        0x604047cfdbbabc65, 0xfe7a6210b0c2b420, 0x0d8adb85e0b4a7b2, 0x6fe903a26e050767,
        0xa129845bdc1053b5, 0x7f523357d1e2cfb5, 0x9613f3295161cf82, 0x5f298db034afe2d6,
        0x5e248410c999c9c0, 0xf54cb59781066143, 0x1e18b2b554a772af, 0x146d989ce509c2b6,
        0x31e4f65e9d8f9fed, 0x643ceed7ac1a99bb, 0x1fc5fc73bad56140, 0x4b5da6618f71280a,
        0x61884e23dcd190a7, 0xdef46c763d938bc1, 0x722bbef0225b21dc, 0xa7c5d6d1e71e19fb,
        0xa91e1232d5f8ae87, 0xcb005908864a1b78, 0xd43b54f3df60d307, 0x2014cc43e56b884e,
        0xea44861a9b103cd0, 0x7230fd85c1b7668a, 0xaeab9e0f57408325, 0x7f7b48f66e350257,
        0x8de04491ed5ed958, 0xae9f6856a49471e0, 0x36e9d3cc8c57e6f7, 0x5c17a91ebf893c4f,
        0x64a9337b0058bfce, 0xee341cd0bd96de9e, 0x4d893ecc3caf050d, 0xe1b49f9e9325ac25,
        0xf0f392136bfb4f9a, 0x7b7c2475410a6381, 0x81b74307d52fbfd8, 0x6cd1399aa2ede6b7,
        0x263c7b5ba93d97e1, 0x05bba6afbfefeecc, 0x58517c18f21abfdc, 0x8fb630f9640d3af0,
        0x5ef817c35369750b, 0x59566376a395dd6f, 0x5e7c28833471b0d5, 0x44fbf6e56620195c,
        0xeedf9d8d452b07a5, 0xc2214834b0765493, 0x90e350aba2f33a0d, 0xb719f931a40a07c3,
        0x4d28e4574cf37ca1, 0x678460ca281d30c8, 0x9d5403bf54fea042, 0xea1a6555bef20457,
        0x354d3f83e75fc753, 0x20efa1b9e08712e7, 0x6795cfef35987b9a, 0x6e1df026ec473ea7,
        0x8c1c8f6aa2920288, 0x9e22e112815bf003, 0x312f4897396f434a, 0x7d4afa1047eeeab4,
        0xfabc80a8a06b7340, 0xf091d738125ef635, 0x7b6884afc7fbc240, 0x4c5291a16cf570fb,
        0x53f067e0dca6f9ce, 0xa60151c097d3fa94, 0x65a3cc652e19531f, 0x51b01ef2df12f671,
        0xd14c7a8917dad895, 0x0090e997633857c4, 0xd146980c157c157c, 0x7c68d6c8eb72392f,
        0x6c9af383904ad76d, 0x9c27e66dee7cd5f7, 0xdafbf2068e60c3c3, 0xee5a86dfdc79a4cd,
        0xec0d142024cc911c, 0xd92ec0fa2520e3b0, 0x84687cbbd2bb14af, 0x284424239e0314cd,
        0xb2e812c795172460, 0x03daddf53f742c2f, 0x65ef91ba59cf0add, 0x6fb94f8849efd4ee,
        0x332e86e7808b8a46, 0x97a57d39ef588309, 0xf24de697ec34bb89, 0xed820567a216e329,
        0x3e75eba261d73977, 0xdcd8e66b587cd94f, 0xaa8e7ce162c6dbae, 0x68b92e886bc8b161,
        0xf6ae9380f4addc4a, 0xfd1833ac84355d11, 0x454764e6988df419, 0x7984075272c68871,
        0x6b0f9596e906cc6a, 0xd362eb9ab02cfe18, 0x98292651dec4c5ff, 0x8fb634e687bb90d9,
        0xab1d31e0a4b4de49, 0xf803b5395a60aebf, 0xa33dc5dbc1f80f3f, 0x82949b09f9d2e0be,
        0x06025893c860c4aa, 0x68ff3d9f373ea76b, 0x49cfd71c408b4bc8, 0xf0abf14b36158178,
        0x207b06273dad76c6, 0x5b0d0d1aabd53ccf, 0x47bb89aa002b5738, 0xf8efb8b931297b3b,
        0x4c0dc22d6d3d1172, 0x8923cd9ac6defb33, 0xb3fe67436e5e5c7c, 0xe7e6b609a501e2a3,
        0x06afc753a7a5a6bf, 0x5fd108b5bcfd6360, 0xb243403b97028480, 0xf2f7fbbe530766bd,
        0x6c87579d930c043e, 0xa9ed1b18c86ba8d3, 0xe05cfcd661a4124d, 0x2668dd43d680ca71,
        0x7433dee7df765977, 0xf1f277d6c1a6f202, 0x6b485409aa4f9097, 0x4bfb86077a30b326,
        0x6e9998ed3526aba6, 0x820c0d5872129630, 0x177a277534281f69, 0xc01c50665ce712fe,
        0xfde9d01acbb3f6b9, 0x7326ed15da92c5d2, 0x31ee3f25a11d77b5, 0xdd048de50658b8e6,
        0xfc38c53c9bdb0517, 0x2ccf87d56ddbaa6b, 0x4963dc95e428adb5, 0xd8514b8a99be4d36,
        0xbdb0baae5aa16ad7, 0x2501cfa31fe2dfda, 0xfc4ab4f09b6f6caf, 0xc95c274666cda5c0,
        0xc699d376b8f81870, 0xd29230e5df595911, 0x35e9939318990eb4, 0xf1b81710287f4ae0,
        0x9882015c8772c3f8, 0x7e175f28f906f6e7, 0x06b900395d958bdf, 0x55f467378ce989c1,
        0x4f58040055420386, 0x91afbd796c7b7db8, 0x7f6b768960d7fae5, 0xa312fd5bf52e6ec0,
        0x0f84385a464536f1, 0xf062392c5f55ec6c, 0x055d8a4bfb61f1a4, 0x8930d8b56d806fe8,
        0x441f13da096f8296, 0x79ef3d0a553b2970, 0xe1b7bc863e0f6edf, 0xfa8e659bc59a5304,
        0x374e968bebbfe8f5, 0x9bb8a479813d0e6d, 0xbb7dfe277ec91c80, 0x079ca0ffeba23663,
        0xa2f6684d5551c9ef, 0x2394f93af6cf8ada, 0xd29a184ef01c002b, 0x9866ffca90e419c2,
        0xccbb52015d4c0280, 0x3b03a22df4a1b517, 0xafc01bba032b8b08, 0x74246ded4d6fc5c6,
        0x7935a8d25a753137, 0x44930f56e2557cab, 0x6deef667ecc66e02, 0x1ea0ae29fb23de2f,
        0x1ce792eeb2f568dc, 0xea431df6eec1edac, 0xac24b12b9c1b9124, 0xf18cb47a3292052b,
        0x25ee808db309696d, 0x1b5d3c141069f434, 0xc83b86881525c05e, 0xc3210d1f17365023,
        0x149a2c4afd807cfb, 0xe2727e7b3587d9bb, 0x4d0a367f290c106f, 0xec4905f827c572a9,
        0xa4aef9e21c0982da, 0xb8f2e1ed5854acf5, 0x0cc692a47c82e094, 0xac0f403492a74776,
        0x1d6b26ef5f698f1b, 0x794cd8af47c56e86, 0x7762a07d5707db6d, 0xc9dc61b79a0aeb72,
        0x9ae278ee0e69f85e, 0xd51ca739447b1192, 0x1538e081d49584fb, 0x674793eacc82c751,
        0xf12726b58a1694d7, 0xe7c5753d1d5c8474, 0xb7b7bb592c146a52, 0xfe52a79a1c5ffd19,
        0x9e4a3b70a8900827, 0x3f7d4e6bca0406a1, 0xc186ab168e46fbf6, 0x89d38a9a99fd2deb,
        0xe6b272fe9f4b5d29, 0x51f6741372b70bfe, 0x6f55222e0603d6cc, 0x7f48c5f1eeab9441,
        0x54642fa4d859a690, 0xdf2e6625067e3cdd, 0x519a7659c797ee16, 0xf7daf4606b7952cf,
        0x41fc227016534f6c, 0x6ee7b59bfee33fba, 0x3b7c5f4b8475e07a, 0x11c8b5a80bd5f65e,
        0x08f933d41e4940e0, 0x371f77603d2acdab, 0x3d5fd86a6bb8fb31, 0xcd6bfc75a9122d95,
        0xe82e975651ca0d08, 0xb689c813066abdfb, 0xd2cf93388ca97dd8, 0x51e62c53135238d4,
        0xd6af67dcfbc0c667, 0x3acc5dbae7514a94, 0x308be85cff415b0f, 0x7522e2779e8523a8,
        0x0bdca05bb019ae8d, 0xb235c8626ece453e, 0x688ae11961588b4b, 0x5a111754d2c61503,
        0x03484e3dda44d652, 0x33b020bbad156c4a, 0x199ee15244eacacb, 0x5f537d07632c9a6b,
        0xc5faaee3bd2f9647, 0xae1c0521940803f1, 0x1f379501a90f8aeb, 0x7f8d45929114866a,
        0x433bbbdab7a71041, 0x3cd2ebd01cc01754, 0x4646dbf211899f64, 0xd5bb2ee417fb31cc,
        0x14e8ad3b3480a086, 0x83b209a9b3e2b84b, 0xab87d2183f0efdfd, 0x72eeb8c90f381c31,
        0xfe5b606e93f5d96f, 0x86d6646c3c656ac3, 0x9d62a55bb6f377f0, 0xa3e9934f08d696bd,
        0xc6495cd1f0baff97, 0xb272112ff89214c9, 0x00804bcbbd2022b8, 0x98b080e0b741d644,
        0x18b362b7efd9d887, 0x7847105395f5f142, 0xb34add66bc0e5fa9, 0xf3a2123a437aedcd,
        0x8c7cf113c93673f9, 0xc059abc0e6226dcf, 0xb90d67f21dfea10b, 0xb93875cc38a0339f,
        0xe0d4b2f4506c0b29, 0xeb646f66b1db7e47, 0x4c0eb22f8c1eaa91, 0x8179277a72b67a53,
        0x0e183a28a29b023b, 0x2132f5952f82218c, 0x496537b52eb0b239, 0x1d3cac1186fe0831,
        0x2c905f7e296e336e, 0x15b5a329a6375f59, 0xa1c7b30eb36a6b1b, 0x847f0cf318aeb57a,
        0x13d8976fb8795ec3, 0x8113f0caabf86e0f, 0xf93a198ba6a228e4, 0xe931c025bf37d7a8,
        0x6c35391c5a53e7ee, 0x6cd378907f241dfd, 0xa830e9a21cf29f19, 0xdb107defdfa6d75a,
        0xc05715a27df3f2df, 0xd93b3f4b0072e530, 0x5761f87132e43d44, 0xf5fa0c61c446bd67,
        0xfd8d7394cd2fe44b, 0x0340da7a5ddfa11b, 0x1b4176f001a8fe7d, 0x2f2590f308e90f1d,
        0xb5f8d088f2da7eb4, 0xf43ac344f66471c7, 0xdb7d820acf66ef14, 0xf64d2b8871654764,
        0x05a3d80fc50025a9, 0xfdab31e3bcaf4805, 0x9f49fcd4d8803fd9, 0x61770d1f9a3db961,
    ],
    [
        0x325c60db7497e8a5, 0x53d8c4489c0d4009, 0x005a4b24fe87680d, 0xe6982c86fbd613c3,
        0x0986df8a2c61382c, 0x8e1a77cf40f56786, 0x482040c5ea886e5c, 0xb2e9371c902c343d,
        0x1dc7221f6fb5d02c, 0x2302981d475589d5, 0xe647c0e671efe25b, 0xd2589ad6e069de1c,
        0x625dfce07b963913, 0xebb91900f9e83fc8, 0xa564435a1b0215aa, 0xd4085efcb4e31aa4,
        0xcac7ccc82d1ede3e, 0xfed99d1a6bd9414d, 0x384704b344833943, 0x95c9bd80d6d7878c,
        0x4431d4ed70be68cd, 0xdef03c441d33a15a, 0x3ead3fdce3129aa0, 0x7ff12c379ce08452,
        0x7280ad9ba2efb9be, 0x21a1002e8d49c05f, 0x6fbc43b76e03597b, 0x7335044ae1118539,
        0xae614386f47f0f9a, 0x6b4715a390c47d7f, 0x2fe71d59384f01fa, 0x2d832a29161f6475,
        0x1c174510eeb6665d, 0xea2a262fbd90d4f4, 0x4b1c988cda1bef0d, 0x68b84dfd0ee9f78b,
        0xb5f4b3a926a3fcc3, 0x07c34677c3a9d932, 0x89a8c9e12dcea4aa, 0xf8d8c55d0a3ebbfc,
        0xf45eb0efb5705e16, 0x9a40644e5dd7de70, 0xde552cf972faa1b0, 0xf0d4146cb572407c,
        0xaa368f59285439af, 0x782af22241cc1e9b, 0x6dbcceb0347d5a63, 0xb853465a3a4a0217,
        0x6a460f3d8730f2c4, 0x63e7d78eb7bcc0e0, 0x8058f8aab94753c1, 0x9ea95bc9adb45b3e,
        0xfeff25791bdd1d9c, 0xfdf4794fca4fad9e, 0xec118827587262bb, 0xb7be75d8a6b3f6e4,
        0xf1253ce0cee95a1f, 0x901cec8a7c0cedf8, 0xe6e0df591b93a60f, 0xba976a58da99fcf5,
        0x2b56fe50a95022b6, 0x75c77f0a4fdf6c79, 0x067c227016171846, 0x40372d2d4919affe,
        0x05d8eab88c6949a9, 0xd37146172e24dbaa, 0xd92532dc4cf6ee32, 0xf4af69d5c366f17a,
        0x90607b92667c8ee9, 0xc5bca7f66d4b7774, 0x42fe5a561cdd50f7, 0xf57b2de8da4fdba1,
        0xa0dfb11340f1607c, 0xbd479708199d8ad4, 0xaa30f8716104ebd6, 0x3fe8e67a7ee09300,
        0x60a83dafcc65e41f, 0xf95395916d60bb8a, 0xecffccec354ba769, 0xc760aec018b26adf,
        0xc9b9a8f3e89573db, 0x15f59c415715620e, 0x7809ed3c4084ef35, 0xe1ef20ee34ff7c75,
        0x712117f408b55f8f, 0x3e78cf1849127148, 0xa93b39f348aac890, 0x3dd8dd09a3a87024,
        0xbc8fbb60ba9659de, 0xceeacfd12fd7989d, 0xc18fddb65fca14a2, 0xed6d43fc5192a007,
        0x9987378773c6ecd0, 0x1fc4ced1458a54e4, 0x66d2b790238bb66b, 0x435b8d78fc8797eb,
        0x65874b6a7479a932, 0xa1ce74acfe1b6494, 0x8b328cd93df6915b, 0xff42fc9bf2ee390e,
        0x5d84a8236729f4da, 0x3b6b7cce8ac45e37, 0xcc1cc31a50f6db55, 0xdcd838d5ed48f61a,
        0x8cfd6a627d9ce007, 0x67fbae1c937a5546, 0xfac2f4ad9b5ebbbc, 0x829cfb383f84cc39,
        0xb0821574e27e783d, 0x346a4a9286ff4cf6, 0x26433ebc9c4dc505, 0x74a2534f66f3a4d5,
        0xe9b786c46a0ab6bb, 0x56c569f83ed4ab62, 0x412d4c97454bf609, 0xb5a28feced06ec67,
        0x4d938c5d23886156, 0x086020f83df5de22, 0x8468c0297e2a402c, 0xf64bb3fd2c0d2e1d,
        0xbacf52060ae96e31, 0xf291dc783b8c759c, 0x65e06ecf2f6b0abf, 0x3881ef1ec3536b7c,
        0x242205692adbdbbd, 0x195b4b5915579cc7, 0x7bb71d151a03f8d1, 0x2d4a2ea3a009bd16,
        0x3169e466c7bd5898, 0xdd92e7309b62e5f1, 0xfcd27c8c4bd3e01f, 0x8683eed6b85c2343,
        0x051fcbf7084eacde, 0x86b588a0c81ec077, 0xf034f132453b6e7f, 0x43f9afa4b67703a1,
        0xd217f238dbe8db86, 0xcb508be98db46795, 0x1003eebe3c166de6, 0x5b8818602f8ae49b,
        0x9e88c26c93e185a2, 0x3bdd7a8bb604935a, 0xd846149abdbbd594, 0x14c1f78e76a7400d,
        0xbf744f6954b40df9, 0x93edd9fcac431919, 0x2abab3c479c7ff41, 0x3fab197ad2ccd599,
        0x449e131923d0b6ca, 0xe8d9336830b0cc00, 0x0fd73860f362465e, 0x61ff0d39b849dcb6,
        0xa4861c12875a8062, 0x8c058f4b8f5f4ea5, 0xd3c4ca78e8f506e2, 0x1a8bf622a43a2bd4,
        0x0b56c1ade5414fc7, 0x018539430ed97b0a, 0xceaec11fb8fd803b, 0x66bc156dd71b609c,
        0x28d16a852335e3b8, 0x4e419004fa0fc472, 0x5ddc5eccf45586d5, 0xaca71e10531e1dcf,
        0x51540c41fc35f732, 0x5e0e2b6e31b6248a, 0x4a6f542c9046955f, 0x032f91ead4cba7ab,
        0x76ba9a5fd9e52885, 0xb3e02907956c2fa8, 0x4b60a5a58ef89ba1, 0xd7c9fed4e31f007e,
        0xe16903f6098746ba, 0x9dc4c6cdabc900c1, 0x5257031805d5e74d, 0xae1a7ff3eff0423b,
        0xa9720a6b084015c2, 0x76c6a5bb9e103abb, 0xb8dbfe8a95f9fd19, 0xd678df4662a3c143,
        0x25e3a8066979b9f6, 0x653da6cad601533c, 0xe1c3a9e3bd6eb2aa, 0xad17a039935ae640,
        0x4ba2e24a0b343e63, 0x98b8efdc49401234, 0xb8c2ec3e569a9e1d, 0xec65a069fbc931b1,
        0x2370d94fd2b80ea8, 0x274c7c81f8d3705c, 0x2badd196495a09a1, 0x48f1e7f8c1a62eb1,
        0xadc06264192d8e3f, 0x97b344d79922cc8a, 0xda7d9949e1b59ffa, 0xf5bb244a24bc2116,
        0x84e3dba46e685877, 0x88952a019206354f, 0xba3fa97db3c69762, 0xeafafb41f79fe203,
        0xc02547ebe91f2859, 0xba1e066e6b224eb4, 0x0c3085381cbc42d3, 0x186a1482263a6a90,
        0x6d950e9213707ac3, 0x2cae8c6764e5eec0, 0x9137df3665dd1597, 0x87b8aced317fe128,
        0x88eb2281a85ecb47, 0xed1d43aee1ccc47f, 0x2b7ef5b2a833fb73, 0x9e480593952ef4f9,
        0x658323ccfdee5357, 0xb05458fbbd7ccd85, 0x69177f2cf8df2764, 0x3f5eab86fefad6de,
        0x78c920c82f2387ca, 0xf31bd38e563e214b, 0x6b8711dda47e27de, 0xefec3fb6efa9f3a5,
        0x9b85e6b5fd40286c, 0x58a280be5b370e0e, 0xbb9199146dd09c0c, 0xb3dca798fe0c2004,
        0x5e22bd3bc747eae6, 0xdef0e4404e691060, 0x426468b9040322fc, 0x391620e27feaedfa,
        0x81b0cb58a6ae5bf7, 0x14ee5b66453d9685, 0x85fed580da2485d4, 0xeb0ed88d2f70235e,
        0x13f728818aa9ffd6, 0xaf78537421b4aede, 0xb6d9be578012f3b1, 0x93b2a5bc09e68ce9,
        0x436a95ae69dc00d0, 0x7ed2476ce7fade51, 0x692f1d81057ca464, 0xd2a01a09bb126028,
        0x28add2e20dbe6f0f, 0xeb24afeb638fc44d, 0x6cd3221a68b43233, 0x80f0bc9d6793284a,
        0xeeef8fa037bb6199, 0xf97c1865735709f3, 0x77d09b4db496bde8, 0x7304ad638f243748,
        0xca64d07f79929dc6, 0x8f2b16e3058e9d9e, 0x27f9fe72aa8c1cc3, 0xab7f57b4fc929a0e,
        0xe5d47b7371d9e6f7, 0x45a2209f70ee9be1, 0x024db16351b990c4, 0xce083725587a1124,
        0x1ff468f4d55959fe, 0x416b009b0bfe3e8f, 0xe3d5f31f2735d373, 0x997a74bcc9fc77d4,
        0x35861a82e458da50, 0x5444a98943a8519a, 0x34262560cadb598e, 0xfec99dc9f649a494,
        0x41df6bcba98d0875, 0xae9096331326ab8a, 0x98b6c31256cba120, 0xc6079b399b35b33a,
        0xbd7df2dca0a23dd0, 0x30cf58bb60aaf21d, 0xc4f39f37a9f3ac33, 0x4433582ecbd85bb4,
        0x6b115026426ec49d, 0xafed2acd556d1ab5, 0x12b0335b4901a4ff, 0x69777fd206ea3410,
        0xa1ef811462879a95, 0x8c2896dddbaa76b0, 0x4cd58c50824ebddf, 0xb6146886251523f9,
        0xfe0a6ea703b7da99, 0xbe47bd98245c7585, 0xc308c18916382b5b, 0x6d224bbc6d834bde,
        0x7117aacdd64687dc, 0x8d488cb6344f3960, 0xab5992e62ccb2f67, 0x445d47bf02fd92d7,
        0xa770e0a704be16b4, 0x57195a3aa9f4baf3, 0xf7f44765be981558, 0x7b2d6a02acf3e5da,
        0x91c7ae07bd81bd27, 0x4c5e2be7bd4d807a, 0xa70f62d19ac53748, 0xd4498170000ef325,
        0x0a11e8dd85528e4a, 0xf42a1e969c0a8bfe, 0x3992a6f79b2b083d, 0x073fb24ad01482b9,
        0x9ae5a91a877bfcec, 0x68a721854f1dd24b, 0xa09554a0477f424e, 0xff84c6f04963e855,
        0x90fb0ba726be7de7, 0x15e00239f0be16f1, 0x384a9f15a5adaaff, 0xeb7865a907d4afc7,
        0x4d917977d7d308b8, 0x2457ffd07cbd6ab6, 0x454e767a854693bf, 0x04316bb4d278caa9,
        0xf2823ac89424ce75, 0x16ce800727dba00f, 0x9cf3908fccd4d5e2, 0xc7c63491bc61f452,
        0x2fe84b728d858032, 0x4a4fce690b1e818b, 0xc19edc61e79dcaac, 0xe874261be7ebadd3,
        0x97b33ee0202dba19, 0x56873834f3c82269, 0x7e139ca5288e71fb, 0xe202eb916f44b54b,
        0xd036823fcf392b51, 0xe29dd68c2857b210, 0x7ed74b5107afe0a8, 0x14799ef9fe378232,
        0xf51a807778f6be54, 0xac989728f5bbe5e6, 0x9065ae66860d2916, 0x6c38d78953d3411d,
        0x5fad27f2c2116cc8, 0x5e0f6f5d359f63cc, 0xf594bb74961d7e8d, 0x58f0142686adc041,
        0xebda4660c8c41110, 0x817b967d02e039c0, 0x3eea607b44d58617, 0xb028045474fa7dd5,
        0xc21257e569963eeb, 0x0d82660079e4cacb, 0x1478981f2fcef01d, 0x45ac1d525be2135b,
        0x936a44b848e3afa3, 0x70d1a05c6bc2a404, 0xe9d3145bcf96bd7a, 0xaaebfcb8b0fbc744,
        0x85d148e7ad8a8c4d, 0x9050c5990741604b, 0x2421878fcca50326, 0x1d1c9798c8b03083,
        0x9f5f9ca940b3ff57, 0xf14e108b5e758c53, 0x250939911855504a, 0x261823d2d20a16d3,
        0x0868980e1d56ff5d, 0xc03f37f8c121fea8, 0xc2fbb850655870a7, 0xfd34e07f4b923c4a,
        0x58f1993dcee8d663, 0x3f6690e678957181, 0xe79ec527ac640f77, 0xfe494244b8d44e62,
        0x5d8758d91416ad3a, 0xcefcf0fdb08260cb, 0xbd3f9bbd176a695d, 0x63db264c6bc18d50,
        0xfae8b5d4e40f15fd, 0x7db92f678778f084, 0x60c70f9042b2ef95, 0x0fc5eafec1301d87,
        0x60ca7ff94ae672cc, 0xce05a482d003a502, 0x6bbcc22ea4de85bc, 0x19b89c621e84f91d,
        0x2d4add370207ee9f, 0x5bb8fca96d66d2f1, 0x5a40e0a9725c8528, 0x5c1aa935c1750dbc,
        0x0411034b4ffd7cfe, 0x74d05e5fbb9926b1, 0xf17f54bd60df81e9, 0x7ca5c156057b93e9,
        0xaa0c3fe221cf84bb, 0xf82a980fe6623555, 0xe474bc8093979cb4, 0x77886412a6997e76,
        0x431814813dd86e74, 0x366589039a144624, 0x2261d849ebe0e8bb, 0xba3f81147184e31e,
        0x3ebdf28dba66bef5, 0x1de663f5b1729b41, 0x2162062ba7dabb6b, 0x743c4462720b2f99,
        0x0703b868da4430be, 0xda2450550547e03a, 0x41fa4b58835befbc, 0x3596dd508f0d5781,
        0x0a4a32acdf392aae, 0x335d15dae02a68bb, 0x7161b669d7f57746, 0x641b6860c43bb5fc,
        0x1016ab74c5bbee13, 0x50a45b23ff730ed0, 0x511bd380980524b3, 0x6350799541d2c5d4,
        0x618a0ecf89fd127b, 0x830d7f30c68257f7, 0x5c290ec1afb26629, 0x383b2bfcc4ea1652,
        0xf62f8eb57962655c, 0x0878fb1b07954771, 0x363d933d9ee6dc73, 0xca46d98d079a7c51,
        0x3f39e529845ec39f, 0x10a34f9d920895e0, 0x72c51f2ef7d6df43, 0xf9afa5d6bb00cd30,
        0xaef85a3165224df6, 0xcf34911e8df7b5e7, 0xaeb2d4388c859aef, 0xf71c07a9b19b84cb,
        0xb49d750ba1c81fd3, 0x1b1c9575a6c5e0a7, 0xf6cca7753f1e632e, 0xe59a16493dc49858,
        0xa420ce4025fd9a9a, 0x0199a1478a6f61b6, 0x8c7f52f35972db27, 0x39792dcacc6a5e25,
        0x007363a1ceb9c856, 0x5198680e63de2bef, 0x085b2f3b2c7da919, 0x50a8e7f54823349b,
        0xb24ec1542a68db6e, 0x5c0c0cba33ee2740, 0x66452f10b180f206, 0xdf4a47e96e7a2511,
        0x44d9ecd0387cde5f, 0x092eda987b85a96b, 0x27b15a1ed470b0b0, 0x35b8789b9ff0465c,
        0x0819a9f37c2c84e0, 0xb64639ce3f2a796b, 0x4560262e9ae347e4, 0xe8b381e5fe39e6ff,
        0x48cdc0af04a8d176, 0xb027ecaa5ce68e54, 0x7f4f6017f6fcc665, 0x6996c8fb02c8837e,
        0x8dcfe17d3741a385, 0x8c4dedb0e423e899, 0x23747e55608cea1c, 0x0abbb815dc0e987f,
        0xc65c7b389175ec20, 0x2018f58c00c3d293, 0x1422386b8e011036, 0x4d903dd729e14d08,
        0x5ebf0e2f83cc41df, 0xa83fd8bbb9e143ce, 0xa983eae9ed79139e, 0x2e7f3b801a31a82f,
        0x2a28f9b337cb7080, 0x4fa75ea067df767c, 0xee17e43fb1e93442, 0x9f359d5becd7b8a8,
        0x99bb310a43d81a86, 0x4a0e079ceba9030e, 0xc95252b14d23e8e9, 0x7f19f799b3064e72,
        0xa35614cd06f24bc5, 0x1abbbfbb8136c932, 0xb4eb8130209438ff, 0x9cd26d90751ae816,
        0x8386b37e7f0c6a2c, 0xd927ea8cdbb3c82b, 0xa374ab0b084b1fa3, 0xb93f286c1afeb89a,
        0x5d5f4d60ebe697ce, 0xc3f18af9feb57a63, 0x858637fb849c99e5, 0xba151f4a1084580d,
        0x112eba3b17a69e35, 0x00e7f18e5f754191, 0xe3cc5ae5cc9ff51e, 0x000a669ced9690a3,
        0xaae29861e7de2e6b, 0x6def8124f9cfb9bd, 0x5dae84138fb80790, 0x071776f7f005b31f,
        0x99610fdf39b0fbfa, 0x176b6079cb5769c5, 0xacee8234f28b2aa4, 0xf20cdf3eedb37a25,
        0x6d8bfe14586b770e, 0x69031d0ee0510421, 0x1e5d23d1bc8407e1, 0x97800fa22d019e96,
        0x7b0604ec9e9942f5, 0x8146ca00f37174aa, 0x110c5a050f5b1744, 0xdef32df9998b6bc0,
        0xa5095ccbe180a21f, 0xec53f4bc973eae20, 0x50a09ec133d81bff, 0x8ff8589b727647b7,
        0xf8248dfd30228f9e, 0x2d168d5bae957d59, 0x1d2c254259eb711d, 0x2d16b32fd30815c3,
    ],
    [
        0xdfd30b28ad2e996a, 0x86dfdecf23a86e2c, 0x9e3ab99934479e7b, 0x4780f12a19301b16,
        0x9f1f39f2a96ef42b, 0x3dbfde5545f45a89, 0xda4654678c56e7aa, 0x8d8d41205d8f6fab,
        0x86f07c2e88222e0a, 0xf7c0f202713f023a, 0xeccfd0ee015d5295, 0xa7b53f3ff98feac3,
        0xdcfd4163744c033d, 0xd048c64fea6c85ce, 0xff0272fe27c4a266, 0xebadb010fdc7945f,
        0x7b1fb4b47dd63c8b, 0x6173f86008287cf7, 0xa61dd49997cf6e9b, 0x2aceddcd898f28e8,
        0xc2c88671e87ab22b, 0x53addd1cd4c80f29, 0x16ec1b96778ee765, 0x321119d38fc7ea72,
        0xbb2cf63b0e3cf9e8, 0x725006c9e8fc59df, 0xe62f6891fdfbe16c, 0x5edc6afca61ee957,
        0x28983aeea0f55cd8, 0xbd7f2e3ab006f8d5, 0x9529fec13417df8b, 0x86f18c448b63b669,
        0x2b852908f95bdf78, 0x035f1744158267b5, 0x13dc4fa9ddfd6b5a, 0x762de5f0527a1b55,
        0xd9e49eccaf95e16e, 0xd4df8df241e24010, 0xf4a4c22b86018a70, 0x5ed75e681e13eaee,
        0xd7bd4056044d666b, 0x8a230e683256c020, 0xe01e50b7400d66d5, 0xce3fca793c15c7e5,
        0x153fa4d47e90c823, 0x88e9e44eb8207fde, 0x306ee8329cfdc4cd, 0xe21ab4797e8215d8,
        0x45804f1a9e76e71d, 0x31c40e90b18659c4, 0x8fbba9774d63473a, 0x6a64f166ba1de4ae,
        0xbdbdfc0e7af9e2aa, 0xb6cc3cd9a4a064d2, 0xaf6bdbd8243dddde, 0xe66ce02a5022112c,
        0x7af4d4aa93926a37, 0xfa411fd69353cc19, 0xacfed2889c2f8b66, 0xa7de79ce971a90a9,
        0x0d7c18b7e60a0bc5, 0x2515b66597a3789b, 0x3457b6858c4d503a, 0xf356917a2f8ebcf5,
        0x64d4eeec9df0fc37, 0x02ac466b3387f712, 0x9d5f2dc3b026e780, 0x233bc231bc368a20,
        0x1fd967ed107f1321, 0x8800c86026ce399c, 0x39d04cdc25e45bc0, 0x5e420839abed09c8,
        0x3f3688f1df97816e, 0xbe0bf3dbd0a8dc63, 0xbd6678a573ce8e21, 0xe8e00328f9497319,
        0x0706a49076fc420a, 0x8aefff19d5716cfe, 0xccfc96ae69e7c6a2, 0x62c9cff003750a4b,
        0xae6e276722493b49, 0xdcfc71d9fac3a444, 0xfd090f38448fa6c6, 0xa0cfc30aba89a51f,
        0xcbe384a133611a50, 0xe76d668b0d3d793e, 0xda656f58e29d992d, 0x390b4ef57211ef45,
        0xffa6c503dda02b26, 0x0d46b697f929c670, 0x8b7db2fddc60110b, 0xa4374ba1d37faed4,
        0xb390daf4e96cf557, 0xf25d1718d6d9f30e, 0x37a27cd954e314b1, 0x53c6eba66972d2d1,
        0xa75adbb3a26328b9, 0xc7495f33a291374d, 0x238a1add64cfc0f3, 0x7873d692ae3221af,
        0x1297c5601e2aa105, 0xe7cb8663580031be, 0x7a4d41026d703f04, 0xbebd474409dafdb9,
        0xb4546ffd2a9b17c4, 0x4a33e462215dca7b, 0x4377af2b5f864426, 0xb83fce10066de109,
        0xc15809ba15326196, 0xdea11cbd29bc1310, 0xaff5332140698a5b, 0x84384686923b4b27,
        0x9fdb8b8d51e59be2, 0x080262246f694b35, 0x7af5af4323001221, 0x1f8550a989069fbd,
        0x366c07bb95486202, 0xa410880c97245482, 0xa3ca3e2ccf38f705, 0x8415df811461b1c6,
        0xa895f386f25cadb4, 0x275d094c94cd2276, 0x20f6b94e386ad1e3, 0x529bd8a24fead0d5,
        0xaf0413839d7df012, 0x825c5031540ea258, 0xc537730f009a7a94, 0x6f2c400b953f056c,
        0x8e049e3dddc39763, 0xc30a1ac2d63509d1, 0x131374fd4f1bd429, 0xd9650892cbadb344,
        0x9383249729d4767e, 0xfb25e8dac25e9479, 0x26661bd6af21c637, 0x5120e0794aacbb1e,
        0x20d2d944a6df9d3a, 0x0978992664a41337, 0x132a87f2336ecb65, 0x1f3b080d0ca20b40,
        0xdc9db55c394f5b6d, 0x199fddb1ab85bdcf, 0xbd7e715f8e78d74a, 0x75192383a0c85b9d,
        0x5ef6beb76a411bc9, 0x894f3b33079ce3c9, 0x4f1b75ac39b126bf, 0xd87db983e105e448,
        0x38eec58ead2eb708, 0xbdcdc4c9191eedd9, 0x5393775bb4369e7f, 0x289f39451feda1a2,
        0x42c1ec1a9cb18efd, 0x7bd6eceb893a9f6e, 0x3557bff8f7868674, 0xf0684f461e52b0ab,
        0xbfd2f5ab3f119098, 0x9ef6e2ee1b22ae3d, 0x93feb0f865f94a63, 0x2a522d8c8cff59bc,
        0x992ac179dae21d25, 0xe07db2f54a41a6a0, 0x874a3c2fc34a2b1e, 0xa8ac73c7b112d35f,
        0x925301aca1a5e8c2, 0xd653593ad7fc7e5f, 0x4f5a0037b424b0fb, 0x8b46621f69941fc4,
        0xf66765ae818fe55a, 0xefef49362935b6d1, 0xde21c49af8fe847a, 0xbd42ed010cd5a04a,
        0x320b8fe96eb4b379, 0xa20c2f179c9d7df7, 0x9889344389567341, 0xa93c08fe6a3d21ef,
        0xa76db4b73bbc2a19, 0x8ed3d7b8e0cd6e15, 0x99093197ea29d97e, 0x72b411fdda7ef7fc,
        0x37040d45fc9d979f, 0xfb470e113a6e6a1f, 0xa2357b4bca38c9a2, 0xc2546e6aad247c38,
        0x90e13821c6f4f514, 0xe2069b2225243d1b, 0x0e622304dcbeff77, 0x78434c309a1a43ef,
        0x9c0ff3f447d4cfd0, 0x7668065609a5b24b, 0x334d46b4d01dfdff, 0x09d9ac41dd84bb48,
        0x9f55e0ce37ea2e8e, 0xd391342263aebbd1, 0x92e2e7389be1379a, 0x38a0d964ad9425a1,
        0x7761a38b3fa9e796, 0x6ff0d6cbf7d367a2, 0xf757ff5cb55ddfa5, 0xf7e840f8ec1bc996,
        0xff399057b2cb925a, 0xbb4a89642c2823cf, 0x09de4efcbe7dc659, 0x06dc5456e19b088e,
        0x1a050a62e040a093, 0x3f592e7ebaea49d0, 0xd04ae9a432ed35bc, 0x2aba7b5316eb0bf9,
        0x4d88918de1bf4242, 0x842bf7da916b661c, 0xb48d03721ef1a280, 0x16ba795e5e5ea6fb,
        0xaa19b17486d7bdee, 0x806753200f8e4877, 0x512f5c7b0674fc45, 0xcee9cb33605c8596,
        0x13cdda9cc45d5b22, 0xf25aa6371cd04e5a, 0x2b414c8e95a638d6, 0x0812cbca2a007b66,
        0xed1145876386c0ad, 0x89a2695d416154ab, 0x65978b84b5e029c1, 0xbc181d156ed25ce5,
        0x8c99927a78e14467, 0xfdb2987ed1238792, 0x427b6e3c0deb1dd4, 0x1d118c30815414f6,
        0x3b0ea863990ab503, 0x429a8863e9f1fe9d, 0xfb591cfd322b1876, 0x1fd3c13f91129bc0,
        0xc375126c1b5dc7a0, 0xb383df4e852c39f4, 0xc133e58f887c0674, 0xba5446b8407fcb03,
        0x27cc07c058704d9e, 0x2a954927bceac495, 0xdfefbdd4ac7c68ec, 0x7bd962482fa6de1c,
        0xaebb47ee96f82cd0, 0x157e2a9d9293cb36, 0x4409f6a9fa564089, 0xa185d2c3829ea712,
        0xf279ed10a0f80630, 0xf19080b193f347e4, 0x8bf0d2706eba095b, 0x4b9788e69a9c74d6,
        0x46738d954eef97ab, 0x9f02f1e2630c8cbc, 0x67e895fa5978f2f6, 0x904d1db24f3c848c,
        0x64c7e6c23d97bac7, 0x833c240f60fb8bcc, 0x3e5dc6a815e20bc7, 0x50dc7a8ea61e98e3,
        0xf3fcba4e4bf01984, 0xdc7b789f068ae34f, 0x6cc32f80d13bc111, 0x277abcf24a8d4d7e,
        0x3e408c5966318df2, 0x70b0ba36a93f9890, 0x07318fd14394eb20, 0xd921d63b9707c3bb,
        0x010c747e27f1de19, 0x9279cb27b90e45c6, 0xbedadd106f69b3bd, 0x1f3f18d70dce02cb,
        0x60367ebbd0ab26f3, 0x8c8decb6f1d58ff6, 0x302af41305614c5f, 0x93d4adaaa4c06f9a,
        0x7ba26f8c02a97fbc, 0x94299d6fa758a243, 0xe40c310df2b2941f, 0x5f48e45a352ad094,
        0xa9f416d751832b61, 0xc41426dd32f5661b, 0x55b8bd3860efa8e0, 0x91109e96971b6897,
        0x6b3baf33c820cdf5, 0xf1563d79f6612d4a, 0x3b6610ac6d19ac65, 0xf3442afde68c4893,
        0x578995b969539392, 0x1975e0c8da261e39, 0x576fd83081b705f1, 0x913f173d5feb0eca,
        0x23fb2fee0c16e0c2, 0x616df62449741ce6, 0x78a1ad1d876f2621, 0xbc686118865ab6f6,
        0x7860b66015f258c4, 0x18a0a70963e71ced, 0xb45798b0632e0f56, 0x371448d0b7b9da22,
        0xe9a7ed20c1a81c63, 0x197ddd7757c21e90, 0xda5b4c3bd2fda17c, 0x4a8cb929e5d35bda,
        0x301840b2f13d6ee7, 0x3f405f5c2a58d6ba, 0xd3da70943261a582, 0xb858ecd7ca6de3e0,
        0x7a9b95b597b1dd04, 0x7b457bb196e54583, 0x64fd1cda2f70e06f, 0x82f5ffb8ccc1868d,
        0x278552618f31b39c, 0x23253dcfb75a53d9, 0xe4a43b7c9d998070, 0x9d0cb2e0a22be3e8,
        0x66f559f3f0b479a2, 0x85c942fd379b6b63, 0x12a63bde20029bfe, 0xedb3c11e6d4234ad,
        0x239d25008cb44d50, 0x758e0b1001e55cc7, 0x1833b0bf6ce8b8ab, 0x1179a9d33d3a6776,
        0x764d5c3d9d55bc4b, 0x499f2d01487dcd10, 0x6fbfc35086f81c92, 0x4ccd16b1b806ce9e,
        0x9283ca4441745f03, 0xc07ca40349bd5a80, 0xe010b19d2bcf3ad1, 0x3ab4b8b8ae891a71,
        0xbe9406697fc1fbc3, 0x80283fd3382564ac, 0x357c61e2e8303650, 0x2d2155446fd1ade9,
        0xb9c07239c3d91820, 0x02598a997fe8f425, 0x9817663733943b5a, 0x573a86a25f8e482c,
        0xf45b2a507f41c518, 0x0e23f984b242389a, 0x5b9a73698d9d5ace, 0x1971a10f55fd75e7,
        0x10b751ff355e7b6d, 0x9fcbe1ac06199185, 0x1ab6d2df155b57ab, 0xdf70c17319701ea7,
        0xa337bc5e610c8bfc, 0x8c9372cf5efc49d8, 0x20864204d641b0ea, 0xb02ac6df2d9dd9a2,
        0xc8a7794836b880ab, 0x8fe66aedda2c2031, 0x37d07a37688e8c52, 0x34273f8da207bd71,
        0x58e797bbdbcb5f4e, 0x90ecd21b8a693880, 0x34f9207c252f6837, 0x01e75348ecf8c02d,
        0xa4497040397253e4, 0x39d9316da498140e, 0x83ef9febfdcbcf20, 0xd452ccead87a4742,
        0xaef2e23df8cf06b9, 0x236f98dd2164127f, 0x24157f13fed8fe68, 0x6338fd7ebff8631f,
        0xf1f6530fc6d8c930, 0x64df53642ac9aeaa, 0xd23e3fa562ce96e7, 0x466a48c847c9fced,
        0xcc149a8d5f0b1d7c, 0x756474982609c44d, 0x8b7c83a62e9d55ea, 0xb484473aff9fafa9,
        0xea0c3b1cf26f91cb, 0x550470499c95d567, 0xdf412faa8469214c, 0x15db086c295f76ad,
        0x9ea62dcd3262fb2b, 0x293dcf87bdcc9307, 0x0ed75b6c8d968b8c, 0x4e0c9ec45975e9a0,
        0x47189764bba96026, 0x8b799c488d260572, 0xe21b99aec57a4292, 0xdda312e716de8b3e,
        0x98cb92a1cfda895f, 0x68e2a3bca3e8a4b4, 0x12ca1b309263913a, 0x82ff40f07570d473,
        0xfedf8fa32cce1a86, 0x5f4feda6ed54d1aa, 0x71e2031c8e5c7e7f, 0xbe46575673bb2278,
        0x3ab94600877ef709, 0x3a746b01fa5f0bcd, 0x6b3c613aa45777e6, 0x4c6de38c055550d0,
        0x14a8bed5a3e32db2, 0xe4c73ae264a93fd6, 0xa4d1c9b28a58cfd8, 0x109c6fdce791a79f,
        0x6c35fb6983249e23, 0x653050f0c03a7aa2, 0xbe0415c17ad9ad95, 0xfb0f1767fd1c8d68,
        0x6dd520634ff07a5a, 0x62fa2198404a1207, 0xed0aa777e26ad439, 0xa07d0ecda92c6b2b,
        0x8818681806a9ca6b, 0x09cc051396c5bdc5, 0xee372a46892161fb, 0xa4fe98dc068c08bb,
        0x7e03cfb6e4c8b560, 0x6f93f83997e1e00c, 0x3b91d360332838dc, 0x41b7572efa1715ae,
        0x33d6956ea07bd7de, 0x447c729d341fe21b, 0x1c812fbb047d667b, 0x9b131840e6220bf9,
        0x88562ed014a4774d, 0x44466cff40f40117, 0x0a23b09c115749ac, 0xe2f04778f91c38b9,
        0xf45368653e67b95b, 0x464b86ecbbd61847, 0x1c4483f38b6bb6bf, 0xc85d4ee44656a8cd,
        0x3e9254ea96a22034, 0xb618f6dbe8aa74a5, 0x62c060c0d773337e, 0x23ca9b75c708239e,
        0xbba40e4d47a50eec, 0x54667671970a8cf2, 0x0dffbe4b6385fcef, 0xe1857f3c089132ed,
        0x90b4e8c2b38c050f, 0x8c75631e7b20202a, 0xd2578cc4000f1802, 0x9758f99ba2337670,
        0x91a39a5e6a857025, 0x56856d8edc212ca8, 0x611739ee57cec33e, 0xc51236dbff16ec74,
        0x2244932831ddca37, 0x0981a8026c5dd0cd, 0x743cb5951713ba15, 0x62a8b7c3ce6e2bea,
        0x27dfe7955c7bca69, 0xdf87ba7114d2a26c, 0x6f7da1ffe06ab75c, 0x57491414df130780,
        0x8363860db44600b4, 0xfa1e2efd671ad0b4, 0xee35f346edbfda69, 0x776ce040553ee91c,
        0x9af40a6b8f4c8a8e, 0x28667a8e0afaf10a, 0x51dd30ad08d41179, 0x5d535e6ff33f4973,
        0x23b19cd3d49f37dd, 0x208a0f61878db06b, 0xf0ebd5f4ac2f3f79, 0xd9ed02ceb37eeec2,
        0xc4a951347a5778cc, 0x2ec3041b9559ad9c, 0xffd864b6a8510622, 0x904229d986df0665,
        0x6a6090c14e3505c1, 0xc742fdc233c8190e, 0x5b16333ed9b04376, 0xf8eb97fea9eab766,
        0x382a34eea0c455af, 0x70f19d46d3cc34d8, 0xc7c5bd874125868a, 0xfcd5dc057795e2e9,
        0x018cd4db06cdcbe0, 0xcba9a773a742b328, 0xcca9cbf8b0b14a94, 0x8a8ffea27f16f4ae,
        0xc921fdb37172d36a, 0x06ad3c90c012a8ab, 0xc3512ea33ee03ba7, 0x3d72dac4a67512b5,
        0x325d8b0d7adbd093, 0x58d27cd664602832, 0x3b950273946248f8, 0xfb443a5dbd516bfe,
        0x25cbb5a624309537, 0x107a387cfb89d515, 0x940fab9ecf1bed73, 0x83b1f39a92c99820,
        0xf8c0ee68af5b8a2e, 0x22dadc7f74ef61e3, 0x5cb2becaa041f910, 0x860d553db5bbe833,
        0x4e635d7056b72539, 0x3b7da9c83af72572, 0x4513f5847a6fe72d, 0xdad885a908ef378f,
        0x7acb26b11623ab47, 0x58fccf32834b8380, 0x2feb563ff8515863, 0x61ae09bb9ab57f54,
        0x11bdd19abb3e6e11, 0x1927e93123a0c56d, 0xeffaae7242b9fc44, 0xde652cff36d09231,
        0xa53a1886fb7c29ef, 0x6f6da55d1b9c6cc9, 0x550e41bce0bb44a7, 0x2b00036c645e4ca0,
    ],
    [
        0x9ad2cbd7ab6cf0b4, 0x61bc013cf9cf03ba, 0x9f08407a661fbdab, 0xc9e4aa244e1c5e60,
        0x4666ebd3b82574db, 0x88067c5e608cbe2f, 0xb5310322cf707c76, 0x27e19335f576cb3c,
        0x827760414cb1fbc3, 0x0d51a072d5516e3d, 0xe5c2c6ff048c8355, 0xb969bd3c1570d6e9,
        0xb9ac28fd0a3207cb, 0xdfab7f9223a836cb, 0x54ff88444fe6f4e6, 0xe19fac99a211ffd3,
        0xff83d71ebdc4e8e2, 0x90fbaba0fdde77f6, 0xc3b19aa0a4cee642, 0x11aa7070b110cffe,
        0x29e40d88032f7a2c, 0x80c05ca75571b4a7, 0xd8f86cbe68ed921b, 0xd397edcd833396ea,
        0x07ce8d96f26ced16, 0xfdb897cef2a65e45, 0xe9ebf11d07638d62, 0x98c5d7682c16bb1a,
        0xda96740b7b552058, 0xb79e355c6e90b157, 0x33afa324cff21b51, 0x3cc00e21091e1c4c,
        0x43673fe8a978c29e, 0xee9f1d1512932e53, 0x14c6b72f78c49b19, 0x8e06336c55ffea13,
        0xf29f600b49fd0ba7, 0x154b84c728eca6c6, 0x9028e2abee908b6b, 0x35ecb4e20a6dc5b9,
        0x13cce7676bdf0c84, 0xd16b0d9ef274f296, 0xe8e0eb5234e972cf, 0x3ec9d0e39b336663,
        0x4a7efc1cf59709a6, 0xa79a97c9833b45b6, 0x4e009f4586c1a4b4, 0xd9621d166087c5e5,
        0x47ecec0a65971a6e, 0x92ca210fa6543720, 0x249aa6362bc8b9f0, 0x2e8a4c575e4c950d,
        0x80ce2f30413408f9, 0x2f12eb06ab920e51, 0x434d475ca97ff366, 0xab65c8f6aed5be73,
        0xc40fb44a3143de4d, 0x77f48e4e76b6698e, 0x7959ca67c4948011, 0xb7e2a5dead6fd7c6,
        0x59b86bcf711479a1, 0xad5276d33f807365, 0x63668621dd97973c, 0xf0acf768680dcbf9,
        0x7a1e67f4f13d1ddf, 0x36223b88feee3a78, 0xc4d7c53658e52151, 0x54bb528913253d51,
        0xc5e866728d8af3f6, 0xcdec82f6f16c22f2, 0x3a1eb2ff40b4b7d7, 0xe16e4573dfb3b78f,
        0xcdaa873d8e2a3ad1, 0x7bae61ce4b2fdb3c, 0x480872eca0474046, 0x7350b9dbe0fb517e,
        0x0ec2ad13205829b0, 0x624d6bd26f7674c8, 0x217c0e0279b7ba49, 0x408f94243f1f6bca,
        0x43745ddb3f76a9d5, 0x266d3bfe559ec6e7, 0xcd5ca5c8b19a918f, 0x091a100d9755605d,
        0x514b56dd1d315ec2, 0x95d14f498a4af0ba, 0x24679ac2712d2c07, 0x78a75693ed5e6747,
        0x36c8564386ef7306, 0x0c09c90597889eb8, 0x413a4a87a78cf538, 0xbf91b62dee31dc08,
        0x0c689cc6626c4d93, 0x2c06edcbd9c894c4, 0x3d6847d762a1cd24, 0xd500db44867ccc75,
        0x6e825c955861bbc1, 0xa6e55cd6167d5097, 0x4f952b7e3b7c7418, 0x0deaeda00a1f99f5,
        0x1106f8b27233ef79, 0x88ed8612d9084e68, 0x36e5aac0a6743060, 0x8b3fc2c851c54ed2,
        0x1aa9dc07a1d341fa, 0x3c94a7ac65246ee9, 0xc082944afb3a77fe, 0x5ac2df38b1438d2b,
        0x74e2760d4b3db99a, 0xb08da907c51885e6, 0x78c1bebf769644ad, 0xae49c2cec53a8bc5,
        0xe8a20bbead7c5755, 0x2f19ed665bb6985a, 0x0fca73187f70990c, 0x6f5341d74dd32002,
        0xaf67343af8773b6a, 0xfc0049002892e552, 0xbae8db8e2c4bcc46, 0x838c3958174bf00b,
        0x06eac4edd2e0f9ae, 0x47b5165f227365c6, 0x32044ae908425a38, 0x9d6919392745dca8,
        0xfd4bc4d8c40b44bc, 0x5b6519e7b318a6ea, 0x5aaedce7d04138c7, 0x5072b8254f0a51df,
        0xa58f0c73746003ba, 0x86efc9233d7e4c95, 0xa3765bce63dfe954, 0xf4a86ab39bbabe53,
        0xcc645205209319bf, 0x80aa719af1faf9dc, 0xb83259fbb1a2d26d, 0xaf96d78563da0001,
        0xb5f87b34c01318bf, 0x0d987e89550728ee, 0x67e3089d7ff92484, 0x083b142e55aa543b,
        0x76216e564f403b64, 0xc34a914cea06210a, 0x13c4372bbf3a4179, 0x1f5b76d1a5648244,
        0x72db22a9a25856ee, 0x372acf54c8094357, 0x46ac0d2ee67cb207, 0xc5a0c654d27d86a6,
        0x9052652e61778f04, 0x96767cdb67bf4290, 0x18fbdb214e672cd9, 0xf2c844ba1a5f8260,
        0x62545902c7e3d409, 0xa15df10fe4becf5b, 0x93785f86570dd371, 0xe9ad408d33a54959,
        0xee3dd5c9af68e53b, 0x9b93189771a75ed7, 0xf534e1590b06ce2f, 0xa8e2e84bf5ebbbe4,
        0xb41d1435dba8e7ba, 0x5df8816d9d926359, 0x3fe75d21a2d019bf, 0x9b738c4bfda98fc9,
        0x706bc171e8a0ca35, 0x4dfd508000bf9b5b, 0xd26f5a513c37d6f1, 0x059f86eb9eede13d,
        0xd46e8ff61ee6fa43, 0xd32c32da91ec2262, 0xcdaff7a36a32c23b, 0x7f2de910ff93fde4,
        0xa7238e9e7726a2e1, 0x23f5e651ae8d5659, 0xa41b480f0b4b3501, 0xd7868882cad314cd,
        0xbeed0a4d87372016, 0x08a4ac61f9399b43, 0x6d4aabc56f038497, 0xd0345db66efa5908,
        0x91acc6d2dd6ade17, 0x9aadf93e13e61154, 0x2ba43a8bf9777251, 0x27c57199f1c7e594,
        0x998f321195d9a69a, 0xf56ec8d414ef39e6, 0x05a7a6a7b1070c2b, 0xff669c38ad053184,
        0x2fae18f5988100c3, 0x5889cbb52d0fcf50, 0x8e8e66141762874c, 0x3a74751cd88df9c5,
        0x8263e888a64a8fcc, 0xaf3801be965625e4, 0xc6829bfbac2dddd1, 0xd561feae6ac0aa64,
        0xc183c12e3834d1a8, 0x261fe9512340185c, 0xa83ffb0f799720c0, 0xb38deafdf7444c5e,
        0x0c692268229cb81e, 0xfd5a656eee6778db, 0xdc07189329971b3e, 0x424757beaa2bc581,
        0x7eaef6626621dd5c, 0xba5314ecf26c4f23, 0x6e5ad10ba1434264, 0xef3942e895b2bd67,
        0xf34d5aa25e9a9ff7, 0x772bd8e46c61bb78, 0x2ae45e1073ffebf2, 0x1031a244db30feaa,
        0x0d2bc606e1a1c195, 0xb293372f46870ef1, 0x401bb71851d1f8e1, 0xbcafe59d5fb9fec5,
        0x1747bf4a2ed4d38e, 0x14a3d4feccef7e40, 0xba431a91fb48063c, 0x9d754a6438b7170b,
        0x78653a9f134d763b, 0xd7f002478e95ad91, 0x24d27b3dae7cdae0, 0xc3266881c4279ac0,
        0x0f286f78b885d004, 0x108e2117797b7eca, 0x4837bfd27ca33e87, 0x061cc613a59c98ba,
        0x4da7a9e6acbff08b, 0x853cd8abba9a0cca, 0x8483703e33729b9e, 0xa796c750791dd5eb,
        0x4198e5d64b1dda64, 0x04c7bb9083116ec1, 0x88cc568dc37b4a2c, 0xbbc460dad92534ba,
        0x477642081a376013, 0x1eb0be481faff2f2, 0x98be503757f0a0e9, 0xfde10dc7aa57af18,
        0xd0d499bb1d9b8dc0, 0x0b7bac5d757f241d, 0x4647f72b5afaaaef, 0x4b043197f1d2bbe6,
        0x9d2ffecae5eb3def, 0x4468da94abcfd127, 0x7ff430a5dd019f1a, 0x62643d810d02fae6,
        0xb268f6a0e950bd2e, 0x1638d64774ce46fa, 0x34ed541fcc129ba5, 0x394ca6b7ecd0703e,
        0xe4af2f4f615867d7, 0xdce91cab2bdab4e0, 0xd0cefcf4163fc862, 0x9d20f9891cc1a332,
        0x535cbe37be2452f7, 0xa7bba1413f32fd9d, 0x97393f65dc6e4487, 0x27a896ab1911bad7,
        0x533d73da49eb0f40, 0xcb4113669713e72e, 0xeecb19280bedb326, 0xaca6b38cc0eb0e28,
        0xb0724016a53089f5, 0x942ee623bb4d9d7a, 0x3857db2b5a63e8ad, 0x4bd50f6469ea3302,
        0x9e0cc8364b06ac54, 0xd440b196a33a11cd, 0xc842654062bd8ff2, 0x1b9dee7fb538f1d7,
        0x01f6b5f3bc529902, 0xcb2ac5921af9aefc, 0xf84aad8e10ef065c, 0x36804045c02228d9,
        0x375fd7ecb05043ae, 0xc64944051afe1027, 0x688792e1aa8da4a1, 0xa2413d5fd3147e7e,
        0x6fe6fc3d55adc839, 0xedaa11f6a8fc67bd, 0xf1f2ea5b4ed4e5fa, 0x106db7bcd9d6da2b,
        0xec9c1b723ca5aa67, 0xfce1b489b85bf054, 0xb727db294ad68ab5, 0x2e8fb4de7a170658,
        0xea42b7fdee57436f, 0x7ba2031991921587, 0x4597729b3946e7ea, 0x5ceb5b83b477692c,
        0x17c2fa4e7725f97c, 0x8cbf9bd88af0e94b, 0xf27a66032e5f82a5, 0xb2f33680ea88555b,
        0xe82a81342782abd1, 0x70fa040678524a06, 0xc9979a9ce27b2552, 0x74de315959a94ab9,
        0xbc96f3967e33ebc0, 0xe414ee3da1e090da, 0x069348873af24657, 0x3fa8a60d3800f397,
        0xf4ce27cd2800907d, 0x93ef27cc3763c20d, 0xc7cbe03a7bf90444, 0xde8a4cb6e8730bae,
        0x72f8af0650b029fd, 0x6a5d3ffe152f220e, 0x65e9f290630064ba, 0xc1e70c125f4431fa,
        0xadfab2101e9d4e40, 0x244d0fac08aa8b9a, 0x4b6bf65cb2f1c3e2, 0x59e32e8060b15e75,
        0x7d45e1e8be479e28, 0x17b6249f41b78954, 0x0ebe0048ffed1ace, 0x4e90042b6926c34a,
        0x931257666ae81a76, 0x70724dec4e564acb, 0x9ba29422bf04c930, 0x9cb22b9864337303,
        0x3bcab0bc6aca649e, 0xdb1e405e6d8a2a46, 0x4473e820e9271715, 0xa6ca35417fe41b98,
        0xb2976a5305415313, 0xfc06d64b2dc1baf8, 0xf617d94e5f2e0a09, 0x053dcf83ed4c8288,
        0x16ac3c6c9648523c, 0xf81ab63e75eb951f, 0x7c3dd28485fe6ef1, 0x1cb78620444b8f85,
        0xadf5d31e086f4867, 0xacc3dc9b5b178386, 0xa0af57fa32a7e903, 0x1877fc678b746039,
        0x03b825776eba4d1b, 0x9f027a1c9019c4c2, 0xedf9266f3ca93d06, 0x130dd9e3afdf26cd,
        0x20a3cc098eaf64a8, 0x7bf6fe9b5d185b42, 0x91a72c475308325a, 0xf556cbb4add533af,
        0x67471dac7d56992e, 0xa3ffb8fd503b38bf, 0x7e8e47e3b63c0bc9, 0x219c5ec151da4a2e,
        0xcdae14bcef7e29c7, 0x304138e4ad23652e, 0xbe22c14a4c37ea10, 0x5db775591fcc473b,
        0xab459314e84a5095, 0x50782b7383035d16, 0x33bf2bdcca55d187, 0x927309501245348c,
        0xe6f7b1b4b6d64830, 0x8d2d517607df8064, 0x8612ae7dd6ef51f9, 0xd51cfd32c45b80dc,
        0x31e159e6c9e4ec0d, 0x16e4f8fa7fcb664f, 0xe2503ddb2b6260f9, 0xcec8ae7b388b333c,
        0x07a30b778622bbb7, 0xda3b206ea86b1f05, 0x6beb69accac2efb0, 0x9a89231fa485cb62,
        0x339c802c79c0aabd, 0xe6260c234737fe79, 0xfc57a54e7e871c0e, 0xfac86124b2b41f7e,
        0xc453a68c73ce9324, 0x98ccc4d0298326c9, 0x6f090ce6d0d8aec8, 0x82dde88913c14864,
        0x547accbda04798a5, 0xc9320b656f10449b, 0x070c33487a8c2673, 0x5c728b1e00766880,
        0x7d2ed0ab3a553701, 0x52587f32b7edcac1, 0x493c691418838c0a, 0xf14262fb161f6928,
        0xa02f4c41e39e8361, 0xed17475711106ce0, 0x506e6d202f2d71a9, 0xfeb37b4718965b31,
        0x436eab75cee8fdf2, 0x5244fcd847c3dc8e, 0x267e98185844de79, 0xac2b3074c118ac52,
        0xe1208a1a08eec1d8, 0x05ebb91a39350f0c, 0x2c59b30005da0e84, 0x9f8ecd63cb8ea6a3,
        0xbd88674fca556b56, 0x0996308423438463, 0x4229590443d346dc, 0xba554015e09bb238,
        0x8e61b567c349b39a, 0xa392ac59188a593a, 0x5ddba14aaed484df, 0x44be87ec9ad1abde,
        0xc1e9b766622887b1, 0x7bb9f1f56f9cb5c9, 0x4e6518e7c9ea6acb, 0x62db0de0f16d3b58,
        0x0a97dffead1d8580, 0xe7ea3ad4e0fe2ec9, 0xe81f312202389039, 0xda69a3fdeeacee19,
        0x50cff3f024251056, 0x73d0ed5751ebc32f, 0x91106c7cd7909474, 0x77214b6283df476c,
        0x01556f146b24d47e, 0x694d3e654f44533c, 0x894c415c7724a85f, 0x1a5545f8d1e63bfb,
        0xabe002747f0fb374, 0x13e589f2e2c8d48a, 0x7bf0f937ef4e8f85, 0x9f1f349c6e5b2397,
        0x26a5aef26a2ab9f6, 0x7a15a7e498c36865, 0x37c936c2d1d0caaa, 0xefd8d69285fa8129,
        0x7532f43577e264db, 0x8f19c74ad62467c0, 0x58544ebabb3c6dc0, 0xb24ace89fcd9bcd4,
        0x46161fffafc0a6ad, 0x8b5dd1c95e6b4251, 0x54107bbb5791ae48, 0x062ac35af0108e3c,
        0x5e2f254480881171, 0x492d7661ce0d2983, 0x11ade23ad4fe39c1, 0x0fd1624c64d4f086,
        0xe88a85b11c458b5e, 0xe38a7cc0f264ae8f, 0xb801d1599b0d3fd7, 0xf2e3bfe8f76e9dcb,
        0x93d7e7dfb0717d78, 0x0b1cd94cb3969985, 0x41b137ff4b2f35cd, 0x1661885c59ba6c9f,
        0x2391e7aea89bdc85, 0x6d70cf6ef71c0e69, 0xe7b253b14319756d, 0x739cc322597d5bc6,
        0x8794e1a6d82b13e5, 0x5e37e1568568653e, 0xfdb103b2861f5f92, 0x57f066a8e76ca88b,
        0x1e90b3a2be054a54, 0x3f3c08ec92e9528f, 0xf303ed9417468e18, 0xca111b2eb9d3b71f,
        0xfd00120dfdc81625, 0xae84f9738359f1e6, 0x8d6f711d7f170965, 0xc50d8f921de9b40d,
        0xa670973ab35fc43b, 0x68acca2ffcb6e1ca, 0xa5dab102b0ea10a5, 0xe925c4956e77fbe8,
        0x7b9d2f96c41ac659, 0x1b4ab74ef97ea9cd, 0xfeaf4c3c208f67e3, 0x78a1b0be1fa579ba,
        0x11c7d93d0063c040, 0x0f32f5200049865d, 0x0c281f5288e6a17c, 0x9d4c6fbd30462243,
        0xf60809fe6f6e8cb1, 0xe0c10a38f01d0fc3, 0xfbf1e7dbbf5551a1, 0x2ffac971427ea01d,
        0x01399059b016dc1a, 0x155d4bf4a6e534eb, 0x9255d416a2ea178d, 0xfebc9a14bebb7858,
        0xf1a8e2b77494d7d3, 0x3b110ac4122aed4e, 0x2f360a583f12d45c, 0xbdbd16ed995f7271,
        0x23add07c320eeea7, 0xea60e8fdaf89dacf, 0xd371e99116431f50, 0x33d5685b90776c32,
        0xfdd1a9c3d64f0710, 0x3ec5ef6d6a3ad263, 0x569cdcd696aefc2f, 0x01892cc03ed5801d,
        0x1046d9f8bac9a2d4, 0x044f06569af02b98, 0xdfce137f5c334de0, 0xd7d34dfca43d3a28,
        0xe4f596dbee7e543e, 0x728b3e3f73158cda, 0x50510c08a5a35528, 0x7fb502a7c9893d7f,
        0xe144f7f26032f0cc, 0xaab8803e52b85829, 0xf1d55911922d4842, 0xd9822f0a15a125ae,
    ],
    [
        0xbf84db58f51b14b0, 0x41b6cf7c90f17cba, 0x84dbc60546e33870, 0x60ae2bbfa32106c2,
        0x93ea85536aa24f73, 0x9ab03e73e194c642, 0x808ae6c06010ffa2, 0xd2028d0557028677,
        0x422be2253741a88b, 0xda738cf51eafe37b, 0x1c445554efab99c8, 0xe19ff8f8c63b9e75,
        0x7ed85e7052e041f6, 0x46a609112da32c0a, 0x056d5718d946003b, 0x4f581d47515f954c,
        0x472ceb94eb2fe229, 0x48f93fc3f4f966da, 0xfa1e5dc3d935f591, 0x8d13b665fc1f9449,
        0xeb3bc468625a24dd, 0xd3a243100c62c041, 0x213043388a01f119, 0x32551d31579d8a41,
        0x5645fefb64886c98, 0xc68450cb4bc7dccb, 0xe30df0a144a56b84, 0x6bb34768240c7897,
        0xc3c189a81d8e0d34, 0xee5f526d12ac8df5, 0xb300802a2dd9573d, 0x648d667432efbbce,
        0x7e50012629d8add4, 0x41f7ac85ba588a5e, 0x11c79184959e428e, 0xff65189c32b4d371,
        0xce88eb02ce8e2d30, 0xcd392b3ca77c1767, 0x77e5dd923e1a4a54, 0x4551a8c7eed95e91,
        0xf1ab215cd5fa51ff, 0xa46e8a55533b4d09, 0x8d90c47f65681dbd, 0xcb89a1e845e1c230,
        0xeca669cfba6504d7, 0xfa5a6c46ce419462, 0xe160d496a0e0962a, 0x948e036668da20d2,
        0xe9d18c7f6cea2796, 0x61dc7318aa04152e, 0x676289beaf62b943, 0x1de7bd1c64457331,
        0x36a748b7ee69f782, 0x82879cb04ae1103c, 0x2dc8fc39f519acb2, 0xb13f6abd9c36dd9e,
        0x863d3e8f01c6f17a, 0xaf049c5ce9acac7a, 0xef61f5c83ed2ccb2, 0x62628fdf8819505b,
        0x8f62ecb8e2fd94f1, 0xda188361e71d029f, 0x6f356aab9a870166, 0x349e4873ec83c953,
        0xdf73ccf5a39a79f0, 0x5d655ff430c7c5f4, 0x23d8d2e5843c4e1e, 0xef155b2a3e917750,
        0xf75140d0e0410c40, 0x607b7106789e3c85, 0x88b6fcd81143166a, 0x90eebeebce9aabdf,
        0x1f3b82c35304f139, 0x503eac2430dd7c2b, 0x7c3c51e7a7f10e58, 0x43f6b4fc0d7d130a,
        0x3d6ef1e7cfdeb19f, 0xb2e1ac32b2676ca3, 0xf8530d6d2c7815f3, 0x145f925b7f470a40,
        0x0775ed416a121363, 0xf92691a0ed5b6487, 0x985bb06c555eb816, 0x6e9932a9dd4bba75,
        0x7e45e47b463b1f89, 0x4d27344a6c03c747, 0x58a6d3bef3cb268f, 0x754c7c2460a5ee33,
        0x702befb30f5c29e8, 0xb5f11b269e5f2400, 0xbaf92d161ead5a62, 0x80ff54ea7b45473e,
        0x3011097c2d42e0b5, 0xf1dd23f73bf94c65, 0x64e401a560c1ded3, 0x64a6c2b3e9639719,
        0xdbcfd295bfaf6d7e, 0x5425fa00ccdb9687, 0x9de61a8dcff227cc, 0x022fecca0faf5ba7,
        0x7071f98ae972faca, 0x14471fab7c4e6bd9, 0x0970719f3fdbc1e1, 0x8de8988832bcfb03,
        0x4fc5c4eaaf2c3094, 0xfc8039984e073af1, 0xe726d25e2200ba6b, 0xee014c2350a15304,
        0x7bf095446845e47d, 0x29336dc99cce80e9, 0xe1a26460e1ed5cdc, 0x36998a244108fe36,
        0x3112c4f6e1ea7e35, 0xdf636db195e5ec9f, 0xe3f3810c1eae5409, 0x0a03a06b43bb1380,
        0xa374002094f08ac0, 0x61cd6ca894385be6, 0xd3c30a6d08eff177, 0x4baaef529b3aa9f5,
        0x3a0575acdf080690, 0x7efec06c261dd422, 0x032ee76634af2a15, 0x3cefd86c004ba54e,
        0x652099c94c30a178, 0x3e3e19dab5def631, 0x21aecb3b497d4ac0, 0xb4f59fb33a21ef0a,
        0x0ce1e5842b5a1f11, 0xc64f29d54ccc7f38, 0x69964b5e4cf8b569, 0x5567c3c713853a30,
        0x760cfa2faff0f7f2, 0x952aab024bdacd55, 0xa27802635ab945ec, 0xab977aee06d4e5d0,
        0x101eab8e181c2fc2, 0xf9b7b7a511dd77af, 0xaa8b43ee78a87474, 0xdba3385d7c8490b7,
        0x9f9fe3990d9ac66e, 0xfb74093f17614dc6, 0xbae14342706536b8, 0xfee6b6b0736feaaf,
        0xc0492e07761ddb38, 0xc5a93e5dada2c1fc, 0x6478c518c4d14e69, 0xa90ce8e5564083da,
        0xc301353500c75a48, 0x0b19e4a67d3ee9d1, 0x40ceaccae37d7851, 0x2c53fbff6a88f85f,
        0x6d74a7e046de1523, 0x2af58e9e9c3a833b, 0xe214a0626e0193a4, 0x16acd40f82fe5aac,
        0x4e38593294ab9371, 0x594ceaac81a3cb0e, 0x19d4a6778ab1d3d8, 0x38c0465730662e7d,
        0xc1a1c22838df80be, 0x12fbce76ec9398f0, 0x144dfdcd1e09b860, 0xd08fe9bf414707b4,
        0xb7388d61549c38ee, 0x312e154775c905ff, 0xd4f1da6fb0371fe2, 0x25da4f5f2eac5c3a,
        0x1baeda402c006042, 0x8e3825c8e0d589c3, 0xa2fe408f65a3bc9b, 0xf25d8ffa2bab57e1,
        0x5eb6c33e607b3641, 0x9e9054b9eee7617f, 0x9a1ed8c331427c62, 0x7606e6edf9d6563b,
        0xf9cbc2055f8a786d, 0x64a80d4648090850, 0x73613f3204b5be78, 0x6720cc3d8bf17419,
        0x383fb245c36099f3, 0x7c551809d85d4a62, 0xf889c0215144484b, 0x0a4fa929cd156392,
        0xcad62d872b0fb150, 0xa530fbfd095564c4, 0xe0692ed59f69ae9d, 0xa17bed74c571da3d,
        0xaa2454e14262e9e6, 0x7431f513087ad30b, 0xd981a4b0f0495ef1, 0x3872d31440f7d93e,
        0x841fa6a3185fc400, 0xf28e85316124a79e, 0x2a5228e8e0c546a5, 0xa6be8290eddb305b,
        0xc6dfb3c73e580d68, 0x31ca3ee221cc6084, 0x4777b4aa36db5012, 0x7a98c527f9361873,
        0x8522738e5898163c, 0x0ade03afe9dcfe7c, 0x037d63972418475a, 0x97889df70252c14a,
        0x5825e7bf16cb8554, 0xf44939e43f27f965, 0x45c96dda2b901188, 0xf90744af2ea5743b,
        0x80c24d51aef9be2f, 0x4a7aca524b7d9243, 0x48afbdbcc7f47349, 0x8a7cf362bbf7989d,
        0xafea920d13778807, 0x9cf2eccdcd90de33, 0x18694595ef5b81e8, 0x6ad0bda72c7a36a0,
        0xcb2bcdb9b1302163, 0xb60e2672a058abaa, 0xd41de5bce9758b9e, 0xa3e76f524350449f,
        0x79e0c2ce0c237147, 0x07d41d3b9757cc8b, 0x3c2092f2cca04f74, 0x15d1d7ca352c9184,
        0xcfa6272af606ce3d, 0x2ad692514f550b9b, 0x110c3a47f8ebe350, 0x0ef8af2b722d5fd2,
        0x7cfccee20b788b8c, 0x45764654ace47038, 0x3635f433fd7f895a, 0x6d0b2e255f88d63f,
        0xcdfcc37c3e30e75f, 0x505e8e5d4c1daef3, 0x94a804579c443b57, 0x8a92068026223c6e,
        0xf445556e64bab450, 0xcea9a100f3d51cba, 0x65ef5300e99a096a, 0xcf7cbdd3e42172ba,
        0x36cc6d422097da0d, 0x2b37679ece890a30, 0xe6359179398b556c, 0x2627c7da33938d5a,
        0xa7cb0ef900137fdc, 0x9632ac5fb318d965, 0x01b82327ca376af3, 0xde0f19566506f42f,
        0xa1f54744625c35c6, 0x000c0c822a57af79, 0xd34fc2d5f64900df, 0x362dfef693a5faa5,
        0x7f0d440f2015d4a9, 0x2537887e9f27c84e, 0x615e8bff0fb7704b, 0x479e1d02c2568c82,
        0x94b09c682455c32a, 0x1efa8d5167bf1e98, 0x4c0467ed96d6e111, 0x2db58c21ade26eec,
        0x25fc2091c16d39e2, 0xd3149b2b1c6b93f9, 0x2156bf83059aa3c7, 0xe49b1251b7c2474d,
        0x0372d05f2d2bac1b, 0x489bd34af479e3b5, 0xc9c751fe10324911, 0xfccfca86b2f18b9f,
        0xecffdf90d954a4d5, 0x4656a402c922422b, 0x386d88b6c64ed946, 0x4d8e8ceaa2f36f56,
        0xa2a3982bdcba73a1, 0x810aba93d7c5598b, 0xbde9093326fed96c, 0x652eccb71b07ee2f,
        0x0d1e927722dcef16, 0x673a9d1ffda636a9, 0x35678ed784bad32a, 0x8b3674f815724d6c,
        0xe65cff39ab4ca69b, 0xe891bf8c75b080c0, 0xcf214213732d82d5, 0xf7a3579eacacbeb9,
        0xc9f171227172e6ce, 0x9eb0081dfc5603d5, 0xf4827ba5ac40056a, 0x70e8630ccc3020cc,
        0xbf2a57208e0af540, 0x120ff0f2bb318636, 0x59e574dcfadf86b0, 0xbef060634e6fa14a,
        0xdc470705cb93b5e8, 0xa34a0b0e8fc3d697, 0x0e8e40e6411c8e6f, 0x8d158d14575d6145,
        0xdd64e5dd467f57eb, 0x9f8363b1c5f3db12, 0x95f7f02407364677, 0xc5abb7afaadf7e6a,
        0xed0b1c0286096fde, 0xc3cce5e813267ec6, 0x38abea5f4e3ad558, 0x2335a9a4a1265b99,
        0x540933502153e665, 0x9f46d5b9ff6025e3, 0x6a342b12c0263f77, 0x204da0588d98f34c,
        0x5371052f6e1dd2e5, 0x67baad2ce1340605, 0x168a0b2fd3e71253, 0xe43dd7f0150d4ee7,
        0x7d3bcec341fe59ec, 0x9f79868f2ce1315c, 0x1c51c950aca6d51b, 0x1bee6899f8aeea05,
        0xa2c76313bb5b39fa, 0x0c228c62ac9df89d, 0xc148e8ea8478bf12, 0xd7e4dc9a65d43d22,
        0x383c9bdebfa71cc3, 0x8610027f5d7a33b0, 0x25764cdfa12bd298, 0xfa3c895c003c17ed,
        0xa05b0c8119e1d5e2, 0xcbc5ef3bead930f8, 0xcbef6fb72a660260, 0xcdaf2a365f3e7b02,
        0xb65c786c1d1f3c42, 0x993ab403030a33f3, 0x3d65d9e03e0797d4, 0xf092ff9ec3a87422,
        0x8617ffdd20678fc5, 0xd60a55ba3ff5c56f, 0xb70170226c00f1c2, 0x4239a6cee3ed4007,
        0xe0d839784e26d062, 0x98f9ead225109638, 0xf9b96f41cd468186, 0x0c0dcf1a6857a141,
        0xa2a10f6786cecfd6, 0xb7349981a86ee501, 0x4f280f92d1624256, 0x614727ceb9b7b34a,
        0xeacb7103f2d4f6ec, 0x5b09b2762434bf38, 0xaa1421f6f949f07b, 0x9791e0e07bc40732,
        0xf8d73b1d9b89a008, 0xfb5d329857bd230c, 0x49d4cf229c09ddc2, 0xe4b56c9cb09f038f,
        0xb9c544fd5b599ab0, 0x9378346c01ecd90b, 0xe6ff6e12cf3b8d30, 0x1c41f752cca29177,
        0xea053c18ab96d485, 0x5d9ad31ad309ed3a, 0x31d126bdec18103c, 0xe5601a6b345f62b0,
        0xa5b1373122902d21, 0xe7d4670074f569e2, 0xe9d9bc87daf0fb34, 0xcb57c8939e7d8da5,
        0x2c5ba6668ea41693, 0x650c8383a4e807e7, 0x03bb15e90880ba0c, 0x64776cdc30ac3f69,
        0xebe9db0fce937bb9, 0x6eed5a44f24534dd, 0x6b093bbdc10a6db5, 0x80e29f4651cbd284,
        0xed3ab7b57976a1d3, 0x39c2c8c7ac6ed4f7, 0x5e92c6ba3f9ff89d, 0xf7afe7db7247f552,
        0x0fd3e40e169f1e04, 0x0dd994531b5d575e, 0x10ae0fb2a7717dfb, 0xd7bf7e3116f18b7a,
        0x46e57ab21ab47bb3, 0xdcd2c5e910031289, 0x7011ec5b364eee52, 0xcc068e81e775efa8,
        0xb63814861e797929, 0x35fe2bb2cb9a40a4, 0x92a3e7fafbaaad46, 0x96ab0de16293f8a2,
        0xd4d223d862bbec7a, 0xed04984f22872630, 0x189fa2218b366ce5, 0x638bcaf46fe54af1,
        0xbd59694b64e2f5b3, 0xaef322bf9fb64068, 0x98b68d2b7dea2a63, 0xf96dd67567474838,
        0x3e974054666df77b, 0x0d061b41ab9aa62e, 0x28519811ec8988df, 0x0906b5bdd515e6db,
        0x794959a8cd41c930, 0xe8c6e893a388481a, 0x22de6a29730e8518, 0xa87ec410b7bfb43e,
        0xad40e29cd7160bf2, 0x11ca1e49e43766ed, 0xdecb1f1efb28709c, 0x384fba9882ca9cd7,
        0x15826c2d1770d3ef, 0x0d90a040700b8739, 0x5f38c91ef7fb101c, 0xb26da7b5bc58cb9d,
        0x91690c6ba945995d, 0xf2c0402ecde3f845, 0xb2b00f6bdbf20277, 0xdb9cb5edfe76a744,
        0xd6dc994dd0a22c9a, 0x1b98fe99d0ba149b, 0xe2d512fc19c77143, 0x17dc7e1865091fe1,
        0x70e96456d634c9b3, 0xbba340c00918f957, 0x415a0cc1c299d7cc, 0x6f951699113c6895,
        0x856866dd1c52cb7b, 0x551fd2ed4d68461a, 0xe90825485588e979, 0x839bcda07d589a91,
        0xe578b31537ec248d, 0x1338e22e9b2726dc, 0x1e6dda7e0141b036, 0x04040362a59b595e,
        0x9d1a5972d95942f8, 0xc56b5cb1f740a84b, 0x8f3fc90d29832fb9, 0x11b22dd4a46f93d5,
        0xb0119c0d9df822e6, 0x42c4a7b171211c2f, 0x8c74c1325b4c6844, 0x9abc8d1c9072b450,
        0xbde8c8272ed9aa4b, 0xf1a494191e534cfd, 0x9fa305f7a7ec7ca8, 0x3f3cf39d1cb7685c,
        0xd181f4448697e682, 0x5cc767820321d1b6, 0xd9075965f692bc12, 0xb78ccae9326defa6,
        0x33036faf623d0a5d, 0xc5cc1bf143d50a0b, 0x08ac1d36d12fa469, 0xbd2365ecac3710c6,
        0x11a93775f293f34a, 0xef5d052d6c4b6fe2, 0xd6f5bdaa08290914, 0xfec426241dac06b7,
        0xf1c424bf24c5671b, 0xa47cc71b0e27f110, 0xa211ed3bf4afca19, 0x039e82875bad2e9f,
        0x748379d1b5d92788, 0xc9ceacfeaca3acd2, 0x3b011fe25a05cffc, 0x536229908ac973d1,
        0x7d2a88d770131161, 0x56e96b9be91ce74b, 0x7a3dc912915db842, 0xaebdb7e782b8d179,
        0xe78e6589eac1265e, 0x0806af6fe3ff3b08, 0x2a7f3048164911d7, 0x8ef4343c0c566025,
        0x38b008f13f710600, 0x995cb042e69f4a0b, 0x47ce2ec22a3e41e4, 0x11d9fc80987e18f4,
        0x089eb941c15306c6, 0xa2defd6741e8aba6, 0xc9ac48d45b281e9b, 0x4c85f0206947b988,
        0xa8a12acfd23e4c0e, 0xd69d5462c9c481c8, 0x6346154360279af1, 0x693d72d223f13c18,
        0x2c58c20bd5999cf2, 0x768e06e831fd72a1, 0xdf528e7b3a8e97f1, 0x79e29fd5b87e50ef,
        0x05cf0f7a16a08caa, 0x26248da5a8bbe83d, 0xede1f94da0e61ff2, 0x1fa774c077e82027,
        0x97ef44fef64ed28f, 0x220c50b2bf79b47a, 0xd31b08bf5bf37669, 0x82df96b92cbc03cd,
        0x81c1f94ad4bd5c74, 0xb4641c28228cc826, 0xb3f2d8fcff03b2ff, 0xd7341655e971a61a,
        0xafd2a477358685d1, 0x43c778bb9bf758f6, 0x707c4a4033de6858, 0x5d0645d5c9a8e159,
        0x71562ee613046c6e, 0xc7de8756ed7e8b39, 0xb215a8abb5728214, 0x1df41f23e2e57c8e,
        0x55db129e33273dfe, 0x4e460bdf6cb3d600, 0x3019c824e622ad51, 0x8f92b2962da64956,
    ],
    [
        0xb721f8d5dea227ee, 0xf5de21262dc890a7, 0x955ee3495228d735, 0x7b9f561a8a914b50,
        0x80e87329429945a7, 0x5abb939f8873a93d, 0x3ab9ec5429e91921, 0x7a748d63003b40dd,
        0x6df7801be241ed0c, 0x725f1e7d80ec63b4, 0xc671c7a430f40e93, 0xd759549dd3341d80,
        0xe029ed6db37a9390, 0xcf77ea3105b6e1a4, 0xcb521d653e36defc, 0xb9dae1b8207eecd9,
        0xda4a07155e46cdff, 0xa4892840c2f97e01, 0x2e2095e215e3d172, 0x775d5a9858bf21d9,
        0xb5e0c7e3f3cbe01d, 0xcffcccc0c9854994, 0x22bf23cb4e84d3e9, 0x1b2b188534a70bfe,
        0x829577b20796605d, 0x562d77442ecce0e6, 0xd578f2ed08bc1965, 0x14aebb350b6da2b6,
        0xcb542f680b566632, 0xa6362bf88eb43733, 0x57d09708f7770f95, 0x74e7b7fc506f7dcd,
        0xdee42663f7700192, 0xa2cb838a861ea138, 0x4c4855ff1b5e7ace, 0xedc44d04794cb3ab,
        0xc3a275857086093a, 0x1793727cb8b0c5c7, 0x7ec44104fd61d824, 0x95b2ff032b1d45fb,
        0x707f2a1877cb5b0c, 0x3a4b25b5f149259f, 0xb19587975d262a35, 0x171323515f3f0d6a,
        0xb0640de895331bd5, 0xfac83eced1ef1d2b, 0xcfc0166ee9a377da, 0x39bfa2a8b9ab0a36,
        0x3344ea7d73554a3c, 0x97efb4951db84dc1, 0x4b35355e243d588d, 0xc3d052e522755420,
        0x2a29135f96ca19de, 0x5cdded16dfdc4a9d, 0xcf8a2dad4d3cf148, 0x1f0921db5d4164df,
        0x1a84eca50bb49e40, 0xc6a84c47eccce37d, 0x811b9387a7111315, 0xd613fbb434485e31,
        0x87109ba8a8bf2580, 0x79c6b3963b9bbf54, 0x456db1b2725b9753, 0x43e0671fe43332ef,
        0xf48c766c3dda8ba0, 0x76b7b67595aa75a3, 0xa04ef2bb8fc5d4b6, 0x2bf7130e9154d377,
        0xc619fe17b7ab06ad, 0x0263ba488c4c9cb1, 0xd931436ee3299f47, 0x8a6824023951b7ae,
        0xb52c0a3fb642fd3a, 0xcb8f53d974113de0, 0x6041aa035c51cfa4, 0x079e9fa731a2a0a4,
        0x5c2351ca34970065, 0x3bf900bca5d92b00, 0xc293d170a67f00f0, 0xd3f50d63ec07b47c,
        0x8a860a550f6c761c, 0xbe0dbe49427945be, 0xc0c8d3c464b43e81, 0x00eb6846dbeab706,
        0xbf4a899fe43adcdf, 0x4aafcc1574926d5d, 0x96ec9f8ed1572d4a, 0xcfa421f7a36345c5,
        0x47fa09785026907f, 0x1afc38699a1656c2, 0x9a7e31e235f00d5d, 0x91fef3367b65ee55,
        0xedab69a6676fae9f, 0xae2dddc112011803, 0x6f0ba223123e020b, 0x985e85465d037d69,
        0x9925a2062c3248e9, 0xfcbe219a356ae003, 0x89fc6309b159fe74, 0xb3baa4750ad7be70,
        0x78e865156d686d83, 0xde561ca67ec9ce37, 0x213550eff088d3db, 0x472dd56c2570686c,
        0x954b5a91dfc02b82, 0xeac735f865ccbe91, 0x83f6e604ffafd8c5, 0x13c9e06459a96c4d,
        0x2544348a478c1b6d, 0xa567060c554736da, 0xcc78f3d8ac502375, 0x560f80a618f71ac7,
        0x4c968dad830a3881, 0x7d293ce503cbfbf8, 0xbe6dfa36cce2539e, 0xc37a9b47d7a1bd35,
        0xc8e56e32957d1844, 0x4cbea1353f0ff597, 0xf1a4e2925f17e914, 0xf6fdb08f8d4a35df,
        0x2ed98d25bc2310b3, 0x71a05a24038c9821, 0x0255a2347590c35d, 0xc716c370d2464242,
        0x70c2e9362d7eb52d, 0xfb586d7142779c58, 0xec501760b42941c5, 0x71c5dd5b441c2218,
        0x0583d94be43e3520, 0x475fc1432a070b32, 0x0c5328913600814f, 0x6800f696519b4c35,
        0x9116bc2e6fd86b17, 0x36764b8d6b78a4b5, 0xb56da7bfb89cd49f, 0x41e92dd9704a91b0,
        0xdd35e1cf1977a29d, 0x2132a072b819f730, 0x3a7135492fac25d7, 0x75da56c72a164f75,
        0x7c4f3c301c46d72c, 0x05996d8cdccfe144, 0x6a3a2fd4fb35bd06, 0x02b4d909364292da,
        0xe13952745fe1eef1, 0x6fd86a7ba57d4e4f, 0x084557abc68e802e, 0x9d714c9f8232d477,
        0xb89b022c78f8f79d, 0xeb084832835aea59, 0x31594ae4080ba39a, 0x2f33f4cc6f322ae9,
        0x997011692d0f68b2, 0x5714820e86200621, 0x3725b65cc9007327, 0xdb77b57b1a0a004d,
        0xc4531e0bc45cb6f0, 0xbbf516b10bb2aaf8, 0x6c123fb96cd41559, 0xff00a4da1ec8d374,
        0x4a55a55d2ea9f052, 0x15c024961838504f, 0xaca004043c9ebbe2, 0xb7d8c7c56c09fc91,
        0x18cf3ac1edf0def6, 0xd9eddc506190f612, 0x5e8d321facbbb608, 0x4fbae8a0d3d50e32,
        0x246b9a55c20ae04b, 0x260e749f572788a4, 0x60843f9cbc2e0801, 0xc73892b086f05ae8,
        0x3c3bd4155647a67e, 0x697571f41dba8bc7, 0x803fbbdaba64c3b7, 0xca9b265a45e24412,
        0x5df71ad2687f71ec, 0x79e25d3ebc48d007, 0xa57d58234843c9da, 0xf19613f39b347e02,
        0x935e7eafa11a4349, 0x38daf27a8a79078e, 0xc40755bb60de8f64, 0x1efcf3c7c602d4d8,
        0xad191f885edbc719, 0x8d32194c9a6353d8, 0xb18e87c0f1af875c, 0x215358371644f2e1,
        0xefe9fe2cfb3fc109, 0x5d975728889eecb3, 0xd822a9d57d6d406f, 0x4c1d2c1fe922ba18,
        0xebda36c9e1d898b6, 0x7429a6468e31d68f, 0x41f1f63759f85bd4, 0xc9e65040568b4c56,
        0x64a41877b9116aac, 0x205bb45d28bebc1e, 0x90623412cff7f637, 0x2dfb3eb9858cd3ea,
        0x8e793d60a661404c, 0xfabf3c47b4c61f06, 0xf505323724a7df01, 0x9313ef5abeefc182,
        0x09ce770a7262ce20, 0x73d4dfd7951a602c, 0x537937dd0bd490a5, 0x919a6df3fc35975b,
        0x256e296af7bc535f, 0x7f56c3e004a2e778, 0xa6b7359030d239b9, 0x7cde2c3eb70f91c2,
        0x79cbbf97f42c797c, 0xcb317b5f20df21cf, 0x105b5677adc6bae4, 0xdac0bb754dabb7a0,
        0xa0d24be4bc1e46db, 0xee36f7b6566da805, 0x157cfe9529c36f38, 0x1c59b62823aef1f7,
        0xf967ec6eb88fe4a5, 0x9f2627e9d8de21a3, 0xc54f5c656fb30f58, 0x8c339ae3505b4180,
        0xe1d6efcd16ac67fe, 0x58cef52c0769d5dc, 0x4c030591866bf867, 0x2a362d71f45a5bd6,
        0x2f6a56da5a1d6cf4, 0xb52dc77cca89a191, 0xc317c1f839312b64, 0xa31c65dd65796a08,
        0xa14867759dd79f93, 0x30b9c736e34d40cb, 0x11d85ac1c783ad3d, 0x94545c8a4212ad65,
        0xd7970ef85b20e5fb, 0xd3fc5aeb553fbcfc, 0xe53c7d6b4d70cc42, 0x6796bece8e2ddac3,
        0x4c4df41f259cbc07, 0xc900a5808591a1ea, 0xe3d91511f59348fa, 0xee84dbacbbda7ae0,
        0x717308e1741b73d3, 0xb4b0085dce1bbf0e, 0x412449f88718f49d, 0xa2ecd9e6057f3aa0,
        0xd8d667d50376ae08, 0x14cd3ea6cf0a1462, 0x0a930b41ced5cc1f, 0x7719474bbe417c3a,
        0xfd3f4d7b780526bf, 0xda2ec867434537d8, 0x4bb7a8207bbcd4d6, 0x558e9c2fd619cb67,
        0x1808286a6627adaa, 0xec3a9aaa09be3dca, 0x72f1d731e3dcdfb4, 0x30706e006d98a331,
        0xe3ed867e32ba4f3b, 0x16df4bb0ae89dcd5, 0x751e7944714022de, 0xc3c2af35f5094667,
        0x393e2b876b9442ae, 0x79c1bc862cb243d8, 0x99efb34ad29f4ec5, 0x0aa365b6bde130ad,
        0x0cfeefaddd58a9f8, 0x033f39590ed8885d, 0x898d94bcc274ee5a, 0xb41ed4aab616452e,
        0xf3d4b06c2755dd27, 0x734708ccffc13d49, 0x61ec00a9b67b0548, 0xe6d0a8cee9871f0c,
        0x46d73cc559d53cc1, 0x3c45b084e43d1853, 0x501e45dda644e230, 0xfba35536923cea0a,
        0xcf409c2e2eb2ac98, 0xe66941046e5a2a06, 0xb1c3d0f123a521d7, 0xa79c8c893ec88d18,
        0x4ab4e6452919785d, 0xaf30439a43a20b74, 0x5e168af3bbf7101c, 0x78bcd4f23a5f71c4,
        0x7f82246d9bb02415, 0x7e94ff7db3fef999, 0xa7e8f5999b18a535, 0x36e308c38cf3e5a6,
        0x350c822e30084873, 0x990010b24bf1e87a, 0x7a4a1cd027de4329, 0xe261f6f8037ce5bb,
        0xd4092830c11f6d8e, 0x65981d50f524a17f, 0x1ce477dd2e016e43, 0x0591b0913dc4984c,
        0xd6e6f6bee06b4fa6, 0xe665970a9755fab0, 0x6b927bba5189b7da, 0x87f1eee517bfcabb,
        0x8d12d2e0eb541d72, 0xf0277a09d37508c3, 0xb5d1395c2791c08f, 0x603be21d3a85f2e5,
        0x40477acb7233a9df, 0xb6b0d8d786f19fd0, 0xdabb99688737b6cb, 0x13a6c576eb4fcba2,
        0xb855a8eef0b4fe29, 0x40d70aa27bdbe521, 0x6ff4fca496094a55, 0x31bfb1582045d2be,
        0x6f9a48d89ed0c3bc, 0x15a3c9c362f31813, 0x079b1fe0cc96a5b7, 0xd04acde01ec51255,
        0x19c4c6209938368e, 0x07e119a9af780ed7, 0x28a4ddb93aa5edb3, 0x781a12f6e211ce1e,
        0x013e263b68b4ebe6, 0x85994670316fadb7, 0x86bcc3422c338262, 0xffa287dc7435aa2d,
        0x123b893a2aa6b707, 0x442833c5757e3600, 0x7481052371d2cb1b, 0x4426597798411180,
        0x06797d79408addaa, 0x8332dc7336400817, 0xdc70f9bd7515b5e7, 0xe58689cd5cfc6abb,
        0x3ced6ee5bb530c26, 0x3c1d9413788d31fe, 0x630059deb8ab138d, 0x902bc60b19e8444a,
        0x99f683e64ffca67c, 0xd12c9411b93b9167, 0xeb571f2764573126, 0xc16f73e56d9cb50c,
        0x7b59c3c597f3ff5c, 0xd4390b748caabaab, 0x3e65fb7cb8a9ae08, 0x52cca38a4fde31f1,
        0x2dcaefca7a17b20f, 0xac7e07b04ce86408, 0xf6d6dbdbce974455, 0x2fb4d99f67ac3e9f,
        0x2fadbb9b72cd7a6c, 0xf55501e004e4fc87, 0x9203ebfc5c0a0a44, 0x4caf2cd10a649c31,
        0x82d4808765843610, 0x073136b215b91691, 0xbfb33f07f9b135e4, 0x3b7816bfd042073b,
        0x74ca482f267a4dab, 0x6c462f5dcddbbefc, 0x2b628f06fb4a0201, 0x06845698f2ec1ca9,
        0x5ae29e5e871390ff, 0x30fbe8d9b5537da8, 0x2c86253b8b05322a, 0x624db4d9195c9bb2,
        0x94c0dab6a20fb162, 0xbf583aa4e84557bf, 0x04129e5df6fdcc93, 0x5f0927c2ff679451,
        0x7a78dac2d2c83b72, 0xe0fdcdae1778ca6a, 0xdd94ae816236ea05, 0x16425bd413130559,
        0xc3fe79fbe75354f7, 0x200f0b2195c80cd8, 0x74095b886a9dc519, 0x10855524f50e6828,
        0x0aec850f5d8205b2, 0xc4b357c83c30433e, 0xf83e575524aa4901, 0x824b3740af824507,
        0xe0dbd707f750949f, 0x6212562564fd96c4, 0x116a68e1f702dcdb, 0x1fff9e3d40562e5f,
        0x305ebfe7e779e4ec, 0x71f756643af3c724, 0x85f6a9bc314c23bb, 0xd03f39797462714f,
        0xeec88682db8d306a, 0xfa4f69ad4e918b8a, 0xacefaf8ff3a029ab, 0xa65373f7aa26466a,
        0x76a87c0605aed325, 0x963722952d8ebda7, 0xa94673db3749900f, 0xeac325d9f389b025,
        0x73249ad796ba599d, 0xfe85545b8d3e4c36, 0x800abf0136ca9888, 0x8651ed57ff0cd43a,
        0x527c16ec98865e5b, 0xb090198219316bdf, 0x1fc3d478a36ac1ef, 0x23216dc625812c96,
        0x2f4576bd81ed7f02, 0x9db2099893b0d142, 0xed48bcf9690b8f78, 0xe2f64a94cf4e30b6,
        0x65c89c05da7afaa0, 0xc54cdff27c10566b, 0xa001f3b988313516, 0x7dd25aa6ee65dad1,
        0xe977a037712004dc, 0xcdb5fd36c05430dc, 0xbf1b30cc463207c9, 0xbae328f5b3c501c7,
        0xa4e752c1f393ecd1, 0x5011126115546011, 0xcf82b63959b94480, 0x6d0ebbeebfba45f8,
        0xe3c80bb69c58706f, 0x245bfa18a1e57312, 0x897b7f62bf4f77d7, 0xb0e1e1d0b3ac894b,
        0xc79241887256daa1, 0x7a7d001397c2b5f0, 0x333e7491f3869873, 0xf7110fcf2b4db6d2,
        0x9bbc25241eda0516, 0x2e258d60d8228591, 0x635a63ba0f53087b, 0x799013ad8674f8d7,
        0xfb8824612c5d79d2, 0x257c7df90b26b9b5, 0xb5223cd005c5aca2, 0xa9eac848416b4968,
        0x1ee9b9e6403b651e, 0x4c79dab93efdf656, 0x44492273afa4894a, 0xdb9490ad98a67af1,
        0xa378f8c61c6a13ef, 0xf26d281fc464e972, 0x317cdd1d20da7fcb, 0x62d1b9de744c6afe,
        0xcadf4bea0cf356d9, 0xb571494fe8e80577, 0x1975bc423bde657e, 0x6356cf468c166747,
        0x5536d45d50178251, 0x43e30313e8520c9c, 0xedbe8e741f0a3991, 0xdb550f67203e5b0e,
        0x92c2d93dce847879, 0x5816f3f373bc193e, 0xc82e4f5a069d9545, 0x1a43bee62e2cf404,
        0xe002b6728a46d0c6, 0x3fb32cf6b5da0c67, 0x3e6e2af049ad3b04, 0x45ceb1e68f255de5,
        0x5de8dab3e8a66027, 0xcca441fc8815129c, 0xe26d644a9517149e, 0x4418cc07d480d222,
        0xc844b70ff68f8ee0, 0x76bfa2acd11ab5e2, 0xbd5fcee8327c7da7, 0x82945e673d7ab424,
        0xe41339e510399c22, 0xe1811b817926baf3, 0xe5f46b2c90d5dfde, 0x2b4cdbd737ff1cbb,
        0x59ea00e94dafc6a2, 0xe3ee06226279af0a, 0xe6e4a26ddfb4ac20, 0x2fd63fc2b62c34dc,
        0xe8c449b2b3c9f4b9, 0x49872453778c5cd4, 0x90b590019d135aeb, 0x2efeca0383a0eeb3,
        0xe3034d6deeb74f25, 0x17d488640196cb8d, 0xca62d95770b118e6, 0xf2d99979c9522e36,
        0x245f04b7099154c1, 0x3b4b003c46dc8ae0, 0x52e04f2210277d8a, 0x962ca1daa7c915cd,
        0xfae5e50159f61750, 0x9fea5c9c1b700a02, 0x9308348a4b492879, 0x41d3fb0db432d19d,
        0x696c924edd7871ff, 0xb037e17c117da3a9, 0x66da6becf237612e, 0x17b248d300f465e5,
        0x984505fb76f44fa0, 0x4b82422c141dcafc, 0x6b81bd33762210ed, 0x617c32a92119600e,
        0x99ddbb3c2baa2c6e, 0xafa44e4ca981d8b5, 0x54f16f88a2e6f56e, 0x41a34aa61c281ff3,
        0xac02f3679d10e11b, 0x99fa49e74512ffcf, 0x487fd70693b04a81, 0xb99616dbab0d52e3,
    ],
    [
        0x5ec9c0847f6a1cda, 0xa51e9f4f5529ec80, 0xf54114d637d77c01, 0xf25d4777d0d42887,
        0x452b6b1d93420649, 0x246777540d2face6, 0xe42040cea85b81d5, 0xe0642d18f9066d73,
        0xc02495ba2940e9de, 0x090df1074def5978, 0x723e5d3da72597ac, 0xc7eaf2c5f037d15f,
        0x26960d9c08ed59d8, 0x03cfdd49fc6d1f3e, 0x2e2b0dad7ab207d1, 0x673aead488c06b1c,
        0x5b3b71ea7c092397, 0x3651d926b1ae0398, 0x670241586eaad1f0, 0x75f97753b01a91e5,
        0x8c87785ad1bb088d, 0x856928c302b900bd, 0xf05791d42434fa2e, 0x012c699444bb5a79,
        0x15204ba9de75812d, 0xc3ba24089917cb85, 0xb74ac27b7ea9b93a, 0x50b43efa78845d09,
        0xcfd4b885335a923a, 0x3845e5071d02f47c, 0xb75c3de03aee838e, 0x8d6fbcc7d9b45206,
        0x1ec0801012eea439, 0x2d6cb0e61aed3c45, 0xbf53d223ecb927f5, 0xaf063553b16679d5,
        0xf5b66555334a1734, 0x8a496598154d282d, 0x38c568ac59508819, 0x00e15d0a1685e460,
        0xbcfac5f85c7e38fc, 0xc2c45fefad9d013c, 0x6d60cb978da3fef0, 0xfb8e903ec8239fe7,
        0x8cd13fa02b69a2c8, 0x3570a3f2fe701598, 0xc474b07f00167f93, 0x8874ffb56487a5d4,
        0x9f361d17bbe5733a, 0x8b4819e4e65ede91, 0x13954df8487719c7, 0xc80c83a4fe771ef7,
        0x110ee33e2b4f9e7e, 0x7e63cf63be12841e, 0xd92a710ae3173750, 0x765390f62369ce91,
        0xa434c950db3c6e47, 0x30cb3fbeb9ed6e3b, 0xdaa925e50393aa3b, 0x906fb7486a10a9ea,
        0xed5d4d7c7efc480a, 0x6e64dd2613aa9c17, 0xbbfc6e6927c86688, 0x698ec2c96fd8b309,
        0x68839c14823d6350, 0x0420274a6fd146d1, 0xc2e18a4b41023c87, 0x4b4892182b7a2707,
        0x9dd6452b6ed5d7f6, 0xd9f7da7fa8ade59c, 0x4d28aca740fa9631, 0xbe1d2ec3a098b3bf,
        0x357299f5b6d2b72c, 0x1abcfa322d8a5f3a, 0x4a49847a4269aff7, 0x410b627ec7afbf8b,
        0x9b76dced4a72854d, 0x20af588615adaba0, 0x89abbd839b373211, 0xea8af42049d9d4e8,
        0xd9087023f18c29ae, 0x33c9ea8f4ace0e86, 0xe8dbaa880063ae25, 0xd374dfa2cd0d8cac,
        0xd801d5a67e249c39, 0x9eb926a37bc6a67b, 0x8c0899c34e2a05ea, 0xf5928e0c9bd1fdc0,
        0x49e377e05698b03f, 0x1c729ffbd7bf6304, 0xc1c5a8fea2e0516c, 0x3899e1becb3acdd9,
        0xf9b69b3f8fc82f3b, 0x4d77af8914ef0b26, 0x29304886e0f21f23, 0x00ab735deabc4640,
        0xafbbea327b2cd52a, 0xf67034934e6da48d, 0xc80fbc1b629e8aa1, 0xa509f4494316ed7e,
        0x4354ccfae505f4bb, 0xb2999dc4dc34508c, 0x854370fc46e15b82, 0x6fae8b37155d00b6,
        0xd542c1a4174e97ba, 0x0df7427771c311f9, 0x5164d722044d64fc, 0x5805c2ef524f213c,
        0x7b0f310a36b657b8, 0xd1d0d091ac815fbb, 0x19457000a637f35e, 0xc02a12b52f53e25f,
        0xc79569a01988f31e, 0x5a5824ba6dc0a533, 0xcb0f7ae5791b00e7, 0xe212050f1c1c1b92,
        0x7e1b550bf682d48f, 0x9c9cc421bc90765a, 0xd712d3a1671a3833, 0x2dc376395754d219,
        0x1f479519aa1da775, 0x5c796282de8f0544, 0x81217e189446cdbd, 0x46cda42e0a3b0e89,
        0x500b9d8cc76c64de, 0xa347c4a2271aef54, 0xf7cf2947a1715a33, 0x512ea17aa055809f,
        0xcbbb678b03bad007, 0xbbf1ab668e300c2c, 0x6fa6c3d39e6e1221, 0x1b4dbf9b2d3966fe,
        0x4a9b8fa1e687b577, 0x27e3ad777fa7df06, 0x076fed3d7e04b755, 0xefee860c21b4954c,
        0x132b4c6306a9c2e4, 0x2976b012a34b70db, 0x75ad9088443b8db6, 0x243cdb79d7bedf50,
        0xca2f579afdc3b7f5, 0x74c6c943754dd268, 0x45d34ebc8e35e2bb, 0xa7b4409acb9e86bf,
        0x48dbecbd2008841d, 0x481fab1b1a6debd7, 0x6d2051cc9fedc144, 0xe5dbffef8eb72ba0,
        0x002ee5988688914f, 0x2f4d392dd0f39446, 0x40a53bdd898bc9b0, 0xd30b8a973ce49191,
        0xe7790d4105c9072e, 0x56b9935ecc160245, 0xe9f4f2226b64f56f, 0xa93a28e318d4ec31,
        0x08908b608784c35c, 0x934544805ef578d9, 0xe46792ab82791daf, 0x428c7017810e37d1,
        0x99428f9a68cfe98b, 0xa0036fb42d13f9c1, 0xed59f18624d72477, 0xe3d6ec43b53cc0e2,
        0x6ee0b5b952a59260, 0xfc304fe39db4410a, 0x9f676404ee57f0b4, 0x277126d8dc561456,
        0xbea67b1e0bb507b8, 0x69caf9676bb32b66, 0xefe06eadfc21305b, 0xdf056e4570645f7f,
        0xa7247cfd251c595b, 0x4d7bfaddd7f2b1b2, 0x3eafa14e5005d8a1, 0x38654a57416ba8fc,
        0xf2b96ecb9e0f52fe, 0x89d18b20b4c930f8, 0x367a1cadc8d21faf, 0x0f12bb88f09c666f,
        0x8fd8c6c13e17cb9b, 0x0264a5971084fa84, 0xbc9caad14116e26b, 0xbc5523697c018afb,
        0x338c9cd2f14f9d5e, 0xe11b36bdb6af89bc, 0x07708483a7afc408, 0x10b9096d7ae4ad43,
        0x28904003ec4fc026, 0x47b26cb9883d90bf, 0xe047a3e347bc6409, 0x28cb44e78822943c,
        0x6a7272554788854e, 0x2d0b3a9d41653fea, 0x9a6cf4e2410e48f9, 0x4bac5f4841ae2bec,
        0x1e203166854c49d7, 0x35a4caf0f60395ad, 0xdde3d3471129ce4c, 0x4d7c4e6d27b629bb,
        0xe90a90c5084d8c67, 0x90f541d4fa5e75b9, 0x9b7d00d5a51d80a1, 0x04813b51be6512d0,
        0xac27028a6cae8b4f, 0xe7d52cdf7977717e, 0x67ba3ac5064856f6, 0x49f76f715414aa56,
        0x658c998e22622bba, 0x65b58a794d365031, 0x136c2ab118b5e86d, 0x61049807d7b8a624,
        0x52b014fc6b68413d, 0xb12f276101c49daa, 0x6c255f6f40c8bf7c, 0x52792b85e3a05dd3,
        0xf79adbeddba28e80, 0x42379567e03cb227, 0xf3c0c7fb8fbc4a64, 0x18a4eeed0a66fe47,
        0x76bf1082d843b66e, 0x23138c57bdc408ec, 0x3d798d923f124394, 0xa436587227af5718,
        0x4ff9a5bc95628fe7, 0x7db5078a7fe3ea2e, 0xc266f5a638811583, 0x9e957ce016ba34cd,
        0xb7bb64c15a699a93, 0xbc09aee4e1bc07c8, 0x268854cc8f45319c, 0x331c02e56bf70c63,
        0xf008cc2c3b782fd8, 0x9fbd32ffb8e4a3e5, 0x72b4c45eceed89c1, 0xfe10ecfb454c4577,
        0xda352dc85a36e4b1, 0x509298d466496326, 0x2a84723aadf25f29, 0x226356f20c0b25d6,
        0xc78e44dc80235136, 0xaad7a5d8fcefa378, 0x44dd204d3fbd8a7c, 0x8ec5f39610a2eca2,
        0x91cfbcf7e1843894, 0xce260a60252a9bbe, 0xeb24f658a72fbd71, 0xca83507735bf6b66,
        0x4666ce7e1e75f72e, 0x0a91cf73ec439d95, 0xa4c76c4f44709dfe, 0xe1f239963bf2afea,
        0xe41b3f23dec8b315, 0xe84d9c6ae1c412c9, 0xefeb573a6f2a5b28, 0x434dc709deb7d3e6,
        0xc747fea2ef5c7294, 0x2be2180f23a495b9, 0xe0881140b181828f, 0x68db27331733964e,
        0xf523667ea45feba8, 0xfaef231ce4e701ac, 0x77f785d71179af95, 0xcd8f1e038e8b81b0,
        0x0f0c9e94ace1b471, 0x50c991a937a6e9a0, 0xce1c7049e5e04ac2, 0x2fb77cab26beca2f,
        0x48fd1a4942326aa5, 0x9a81d4403b414dd2, 0xb5527dbea52c7676, 0x6603c8018c13857a,
        0x38a2cc6d578e463f, 0xb73ec84b811e8f01, 0x3b2d3d63c89241d4, 0x9c8b5e93a39277d3,
        0xaf1d7e88507946df, 0x07b8d23f13874ac7, 0x203db8c5e164b910, 0x0da089161d3d69c3,
        0x6aad9f964644840d, 0x2dc20028b66bfc5d, 0x43ac0ac2a16edc23, 0xd7a7bf4687333831,
        0x1ba730bfbb57a641, 0xdac833ed47cf528a, 0x2446dc8129a6fb5e, 0x8f1958230a910146,
        0x212baeb77ac41e9a, 0x152a1fc0d5992163, 0xc6f37bc17c404560, 0x2b0c7fbc7857d80d,
        0x85e34c0e6de84422, 0x1d2f0147ef6d497d, 0x4256d25c63746274, 0xc9b7da4e515f39b7,
        0x865834da0aa329bc, 0x39d94e3178c0c439, 0x072cf1dc8cabf0df, 0x422126da990dc567,
        0x588d2e88f43312de, 0xb7accafccad9fb50, 0x2c9d7ebba741cf9e, 0x34f2eaa66030f2ac,
        0x96053ab58462ef4f, 0x2ef790c2298dba63, 0x778fdb565f67ec30, 0xdaf9699690a22eb7,
        0x5fc643462917b1c7, 0xfaff225c2fefa4f2, 0x3986a2079055f802, 0x61b83e4361d4b0a6,
        0x4fce4d95e56564e5, 0xbbe74a5e0a93fe1c, 0x72557d713a1c412b, 0xcb50b9410dd82d19,
        0xa9b5caff70c06860, 0xd2eacc101c67439f, 0xbf3ea3afd105ba3b, 0xb8b324d11be76434,
        0x748527784875e775, 0x6ef3c3745415d73b, 0x17c6df2978cb7833, 0xa10c5dff6a814a69,
        0x9ecb4d445f9f4a56, 0x9e13597623755489, 0x4782f842f74e0672, 0x4a80168e7fe77eb0,
        0x769457e1f1e3d8f6, 0xf51e8693903bffda, 0xb8c2793c2a792bde, 0xbb6019757baa3099,
        0xb95fdb4f5759c63f, 0x697c7b4ad790a4c7, 0x906fb21771294012, 0x7c26f1c2ce742384,
        0x7002380fcbb88796, 0xb6aa395551342ef2, 0x843cfa3d4a82dec6, 0x6e5ba5933b1cc635,
        0xa38e436f84ccebf1, 0xa473ef4c1efaa157, 0x070baaeec1c4de69, 0x931759e8ed59a28d,
        0xc3f3d0322e0a695b, 0xfaf7d22495de8ed3, 0x0e26e4ad6d086e9e, 0xbbf5c1a8dbe14699,
        0x3bb4a8d734e9f095, 0xd18e986529d7cf20, 0x2446e5b3bd68c23a, 0xc13ccdd70ff76704,
        0x595cf03f29206e86, 0xd63270e9744b44ff, 0xd58c10e50c5b68e9, 0xc2c671fe3daffbf3,
        0xca9bacfe8bbe0560, 0x3b9e06e096488fc1, 0x0a5538210496cf9c, 0xb7e0d135966c2060,
        0x0fd746f22b6db70a, 0x7489a8f0ffa4b625, 0x0a0d7c0ca5371d3e, 0x95a5d753bf55cd81,
        0xef80a48fdb9f6dec, 0xcdbcb7629c592dee, 0x94024dc2c3913acf, 0xb788baa19cea9176,
        0xf83c1f6d81506701, 0x3e4b31b6e90c322f, 0xfb2887905de5caeb, 0xeb77eee5450de941,
        0x06f56d0fba86d14a, 0x02b900ad05bd09b0, 0x212446f8e2707793, 0x8f87f59727cf66c5,
        0x0db55ed589e0ff6f, 0xcf1f376fa5d75083, 0xeb4c2648b49b0e1c, 0x008e593c832d93a0,
        0x5cb9a4d128343b2d, 0xd7797bb3c61b2b5d, 0x5f01b4c2426c6482, 0x7cf24ed3382ff0b1,
        0xad7b8e8baa61a893, 0x1d3e1ec8c67ae4fc, 0xc1eb8df1a7cd2367, 0x84ebdaf0a9898348,
        0xb8655a5f7fb1c641, 0x7caa73ab43554ad3, 0xbd068cc10b4597cb, 0x4d977591ce247c73,
        0xc4c30ce3d71118c6, 0xa2697ab48d344776, 0xde9220a0e410e175, 0x8c327e5940bda4d0,
        0x27655358e0a96abf, 0xb1b7735fedbce1f2, 0x65fca552ab305260, 0x042fb2242a665719,
        0xc545baff71695101, 0xdbce3d9f9efcdbcc, 0x64fa5860f0a5f163, 0x8bd0a69e21cde059,
        0x37d9b946aa86a4b6, 0x550765f6df8cf2ab, 0x896606295df5c0a7, 0x412148d96ca05485,
        0x3eb739d2aa4aa737, 0xa75411583214024e, 0x5b8ef9495bc0961f, 0xf2a3da7380b9c9d0,
        0x0342d32bc28d5414, 0x93208743cdc8e55a, 0xe1b5c76d689b1176, 0x59d34ad644d6f1c8,
        0x4b62a429733f37c4, 0x56730292f177c075, 0x696de793916e8f3c, 0xebcbf0120d251d41,
        0xa08c780f952a52d2, 0x37635d0434cb97a7, 0xb6bf27de15e2fc17, 0x9a801457c401f926,
        0x8e72e5f765fbe439, 0x59af0ec38aac717c, 0xb13ba7072ae831d5, 0x2705a00c8c2688ed,
        0x395836343fb2d6e3, 0xfe47a3b16888482a, 0xac2db91d97b98f1f, 0x66fbe9f74e912104,
        0xc7313eb1a65c09e9, 0xa257bb8152ce2ee4, 0x310b4d56ca53300c, 0x13823c5858fb0165,
        0xb8874d88af219f21, 0x631e5cfb11b1b81c, 0x602541d61721b395, 0xace578409357cbf2,
        0x88796e8500190b73, 0x6718bce5f7725460, 0xcdd24b77e4d6c002, 0x0b1fb0e6d86a71e0,
        0xec157abd9986a0c3, 0x0deda6528ebdb4be, 0x778a5240968390b1, 0xda8265fe2905e726,
        0x18ff333540da98b1, 0xa5839e9c98d31f5f, 0xb78f1c8dca89f922, 0x60e46823a74da3f4,
        0x5516401a87c26201, 0x9d8554d994f0d878, 0x3d6d4b2a8f4c65b7, 0x9b30c9f2857e0356,
        0xdb5fd8d66b652a3d, 0x77134fe8e34a7850, 0x4b3a9b859401bc2a, 0x85b9c76413c23444,
        0x26d38b6436ed53b0, 0xbd90e63fbefa7210, 0x89ac52a314ee193b, 0x2619f254e175b0c6,
        0x064a0500ce65b49c, 0x5791b35fcfbf2a4f, 0x2d9b60951ae3be83, 0xd0a19b53071ec0c8,
        0x55da0db6c506a394, 0xeba88504d23d3750, 0x0b9c2f4bdb364b99, 0xb1517aa03d6e9964,
        0x45c6b66537d8d520, 0x2f7755d850aabdb6, 0xa0d16d39d2b77c29, 0x133c138a82bceb4e,
        0x8fb13cbfcfd99e1a, 0xbfe570c8724025a0, 0x3fb666619a852082, 0xd3dfa6b2795b61b4,
        0xa1fac4ae4d3cb6a6, 0x470f5e7217c3e08c, 0x7298af8e56a7781f, 0xedcfe7f7ffef45f5,
        0x0e794b053919176b, 0x9a294b898757f955, 0x6848f83a99bd538a, 0xcc560825ffb0137e,
        0xac23881d005295ee, 0xdd3b470ea12d996f, 0x7702c3c5269f189e, 0xd079ecb42f8f91af,
        0x0fbfa7695a46bc46, 0x312be210e8b8c133, 0xfb9a050246a7bf92, 0x982ef71d39a69e3d,
        0xf5dfaa4a4efcf558, 0xb8c2966ed39c36bb, 0x37dbb7c4325c54b1, 0x2157ba6e31272111,
        0xf8803b3711ab8b0b, 0x4d93de460a193140, 0x4099a2e6b07160c2, 0x24834481abe47fb7,
        0xfdf6492a454e31d0, 0x6654d7b1a316d17f, 0x3384ea5b77113e0d, 0x75f2aa6bb1730860,
        0xbcad3bc6b5fc67e9, 0x9e04455dac3fc2f4, 0xc9c7162572bcf6a6, 0xd57b3915ee6c3abc,
    ],
    [
        0xf9010095d2a819b5, 0xe4e53ceed9c12e2a, 0xa24a35e69cc17f65, 0x18996198d8447e16,
        0x6c332c559778aa8e, 0x68eb19c7edfea522, 0x2aeba1d24ad49f66, 0x01ea2535510d515f,
        0xe7c03c9d44ec2bed, 0x414e7371941c1244, 0x9c096e1923e48f60, 0x79bae721252cc655,
        0x37c0867246cd4141, 0x790c0b30383b371c, 0xae72ee7456e9e473, 0xee0315879c34971b,
        0xf45cb816d373a65b, 0x324ca06eaf76f475, 0xb6e35b3afde6caa3, 0xe09c063bd87b59dc,
        0xc503a8589df9a165, 0x1a959c58059fc0d6, 0x905114cc111696ea, 0xddd4fe3d87c1c66b,
        0x2b1e02154ad6bd44, 0x77a43055f34ca404, 0xbafb8c4d7b7c299b, 0x1f88f5a9c14bd094,
        0x62cc4c05a720cc20, 0xaf77f98b3cead86d, 0xa40f629f0e7662e8, 0xdfc9578b41aeb39f,
        0x737ef5b4871b0d3d, 0x176555801dd267d6, 0x534c3425088cecd9, 0xf7692c14dd62528c,
        0x624c8f61661aaa4d, 0x63fc4863aeea0c91, 0x3b54c223b56baf4c, 0x16e0d824edca784b,
        0x15a291e67527166e, 0xecfeee53cd0d497c, 0x8da0fd8d6e01b48e, 0x5a6c031460156a5e,
        0x65dcea2f4fbf1899, 0x648ec4fa52762d8d, 0x1da7964b5997987a, 0x305b7479d0058ffa,
        0x2f44c8ceed1095b5, 0x6433b6fcb89e18fd, 0x0840804ddcaa3319, 0x3d24685bd7711aee,
        0xf88fa0bd4f1b618a, 0x9d4eb7da797a0b14, 0x88abbc67c8750fe7, 0xb9ec58d776c32e4b,
        0x2c223ed1e83ee840, 0xa4460ef144e8eb9a, 0xe6f0cb5c55fc5757, 0x0e3ce7ae407aec78,
        0x9dc3803cf2f79af6, 0xc685389abd1a426b, 0x0d87d506c6f2623c, 0xd63e91e139bb481a,
        0x5291aaf948f2f653, 0x11983fc17fc1308f, 0xc49b3e9a89d9abe0, 0x17195d76662171dd,
        0x290ae3ead1b8d8b2, 0x68e028b8a400db7b, 0x16ff2bad9d40861b, 0xc861c54c489e7856,
        0x0bc4f4a276cf95c5, 0x1d48fe5394f1da50, 0xbcc6fe538dd36f0c, 0xa3b9a4e5c4743792,
        0x3c0fed171a60d8e5, 0x6dae5df9676f8168, 0xcecde6c1743e16ee, 0x5829eb07e76545cf,
        0xf2210e006078d95e, 0x3367845e76391adb, 0x34eb5e1387fabf4a, 0xf3e4b9efcbbdd4ec,
        0x9b1099ef851acc4b, 0xd0f34c38f518e1c1, 0x1f58a4d33a46e782, 0xfc2b063eb3dbfac5,
        0xda01ad529e020c66, 0x8e4032944eebc853, 0x3d289c60d534cd21, 0x6cc19e4399d9532b,
        0x9ed3f63713fa1ad2, 0x0ba278bd0e51cbd8, 0xdaa85755e399a5ca, 0xeeda86fe7dd55c1f,
        0x6b7e04ceae3143a5, 0x00a3ec71eb0bc1fa, 0x3f1818e6b4e34c6c, 0x0d4a8341df57773e,
        0x6fe10a116717a3e1, 0xbabf9042db56004b, 0x04af8c4c559c1fc1, 0x84584f9867ea1eea,
        0x8a92370d4a9a8315, 0x8d1ea9fd128818a8, 0x63a7ff165ee87ca4, 0xfab3afe355d46fd0,
        0x44d9c8ab44ee1a5a, 0x4fc248c60cef95f8, 0x69765ff01825d97b, 0xe459ecff180b0de6,
        0x25725b0dc59404aa, 0x48d6584a6bd6af88, 0x38b0f084b7481f45, 0x66a83c3b021bab69,
        0xb20e161ccbac98e8, 0xe4e01a46951c4bd0, 0x81ab300ad3abe7d2, 0xef8156132dbc9a61,
        0x833ae7081e7cf4dc, 0x4cde5260828aa4bf, 0x452682b9b7585799, 0x4d935d3d826458cd,
        0x292f31640a56cd68, 0x432ff7b08c679952, 0xd209a9c686c40ed2, 0xdcdc072a99984155,
        0xfa533907f0afe366, 0x3eb4d84d892c2d0f, 0x82f403032fc09ae3, 0x28cfe6a1f448b8e6,
        0x3e2bfa0bbf533883, 0x6cd97bf7a8f03a08, 0x25464f377da225f5, 0x9bc8485b680d17bc,
        0x0722d57c88f014ee, 0xc18bcd896519802a, 0x452e60f9bb86a9ca, 0xf32dcfeb36fdba1c,
        0xab18bf060f56fea1, 0x101bb4fe4c584948, 0x9a06f1057c48ca04, 0xb7a3a6ae33a81bb9,
        0xf767d7a620d2924a, 0x222aa1cea26fe169, 0x4ad6863586236a62, 0x1b6b17934855a43e,
        0x9246c61a66202ca0, 0x38aa2b1db53be8fe, 0x899d1856a5e57fa0, 0x52d37cd020c81dc5,
        0x65afd73d0c2913d9, 0xe19ee69a402fde89, 0x95e7032bd311dee4, 0x6e474499639ba66c,
        0xe5816f517f59bac9, 0xf11f20f6ac2ebb7c, 0x4c119aba7297010c, 0xd4b8fc54fb814075,
        0x0e5ab52eb7ae12b9, 0xafa0a25650514840, 0x3aedf0a8028f153b, 0xece6957dc9b4f968,
        0x6c288c5353168ad0, 0xdb19f2eea9917def, 0x05d55266abd3cebb, 0xeceb14188625626b,
        0xe9fe705dda584bd6, 0xb5cf2c282ae4725d, 0x90dff4d35cc96b94, 0x4617926c9846f0db,
        0x2e94f8c8406880fb, 0xfc0f7030e5fbb57d, 0xde8ae4074c97095c, 0xfbe00c088ca0585f,
        0xea926278a273e09f, 0x46c8a0610e1747a5, 0xfdb059c9112e794e, 0x6e1112a75501d69d,
        0x443352b53bc6a7ad, 0xaf8fa17f7fe354a6, 0x62a6d8d545aa8948, 0x372c38565e07410d,
        0xec8853d8acd13385, 0xd3d23790249bff50, 0x84509dfe869e747e, 0xf75db7dbfc6f46d4,
        0xdcac21f9f6fbdbdf, 0x516cbdfac5e2687f, 0xa5b7fde20fa20f3b, 0x9fce6e38d2d8e622,
        0x88a58ecf8e279e27, 0xa0bfc1ca74499723, 0xbffe7d4d002cc587, 0x8a3c28230658c923,
        0xe48e37471a523ee2, 0x09f4d266f442fe36, 0xa2fe66cc1ffc3f0b, 0x71472c11819ccc86,
        0xae40634876fa941b, 0xfae7c2d848925019, 0xad35f732ed16cf06, 0xadbd0c1f7ac19885,
        0x879ee748372e757b, 0xe3d7e99f55faafeb, 0x79179cd25f822a31, 0xff42daff49c9f710,
        0x06d6b55225b66987, 0xb15a86657ede94c7, 0x2651d3e628510f8f, 0x594d55654ada74ac,
        0xaba9778881390ccd, 0xd95a2a19acdc872f, 0x2518695468c45c2f, 0xb628f163083b5f53,
        0x67024b45f0035373, 0x9092acd0fe00df56, 0xac0c46dd6e8892a4, 0x5d9a283bf5d06b03,
        0x738e1544b6884359, 0xafd2333fc9992b55, 0x4a4a6a43e5df7140, 0x12e32a7833a1317c,
        0x1a956daadb66ee0e, 0x68c28d0cf161c685, 0xe0a1cb9d50d9433a, 0x82eda20052779586,
        0x91b8779b8b52d037, 0x1d12f2dc54c3fae1, 0xd2d3ae9bf865e262, 0xa487cf9fc34fc1f3,
        0xed441dc33625a669, 0x7de9f967c6abad3a, 0xff1b41c3406fc905, 0xc2d5a447121ef237,
        0x70732bad51faab7d, 0x2e6447295ff2db51, 0xb257a968bb59316c, 0xc169e23ac3dd4fa0,
        0x102b120b529143d5, 0xe225d3cd1ed79faa, 0xb62bce05e1afb614, 0x2219fe0b068b0504,
        0xbc8e03ff0fd5748a, 0xd71f160cc430b12b, 0x76175bbd5d4ce8c3, 0xa1b16510033276d0,
        0x559115ab6a7a8cb1, 0x2e6660da6bc7fbbc, 0x904366e58d23be04, 0x3ab7ba6888586874,
        0x6f9ce2a423e9e959, 0x8242405dba1eac8f, 0x54550dc54f5b2129, 0xbf6978b68e8c8034,
        0x0f077127fae130bc, 0x708344d90145176b, 0x5511f4e6424ef713, 0x0c548d899c35e852,
        0x4d40f1d550fde3ed, 0x1ac77f915d713a1f, 0x74074d7fac757f41, 0xa7ef94850e9b5d8b,
        0x046424df23ee068d, 0x0f311ddff2ece2af, 0xcbdd01a22bf445f7, 0xefb4fb68dc42a2cd,
        0x84b19b801d280206, 0xd2c9aefa134c2e3b, 0x570d3eebe3530605, 0x894eae85bffb951b,
        0x5c4a3999790563a1, 0x5b7363426b6a1f33, 0x88073e34e0873ba6, 0x10ee400fb410c5ef,
        0x3309fa65ba9e2785, 0x97bde382b4140bd6, 0x806deb4afa6e3eec, 0xd92950947e42860b,
        0xf501bb4c4d308206, 0x640c035cfb225f92, 0x9fedef00e5bd6486, 0xc7e8164faa25dbb5,
        0x83bb266634d0fb02, 0x425dd0e4322472b6, 0x6d90d303474f7873, 0xeb79cd2b2fd217d1,
        0x59657e47eaa7042e, 0x069f7862b1c766dc, 0x9b4e225fe523b764, 0xb902c4882f06ec6b,
        0x89e664d41b5b0ab9, 0x7bb496af55e36d40, 0x3bd3ca3aedfedc54, 0x4ecfedd2a57cec36,
        0xa57929ce3063f2de, 0xc64a11fcb14a183c, 0xdd9329253ac71c41, 0x789498d1f1cda3b1,
        0xd69309ddf1e92b52, 0xd85877ec3775471c, 0x80e5240dcf2dfbd2, 0x65d9009a44026f6e,
        0xbd2c012d81174d10, 0x6c579abb5c28a48b, 0xc15035b653be7c02, 0xaaa553c1a926ab1b,
        0x64006aff0ca427fc, 0x5bb6843783d46be0, 0x095cb1818ea70976, 0xd858958182640d26,
        0xe2f4ab2aeb184e71, 0x3e3cc14661494df0, 0x7324a14db0f72c6d, 0xec92749f9a198b50,
        0x2011d221970f6c34, 0x63af31520b09854e, 0x36884047feddaa1b, 0xaa1ae8748c37990a,
        0xee9ccf1af8a54c75, 0xbb2988e06f12e75b, 0xb86bf654a658f660, 0xadf1cd2f2b378157,
        0xb57e695b48710433, 0x356e3a352f58ccb5, 0x5c85d3d1cd0a2c20, 0x698c9fe8d029720d,
        0xd30b6530e8c130c5, 0x7e8e0e080a779f79, 0xb7848e94f60ce893, 0x78b1ca372289a71f,
        0xa40d7ce3d96ac240, 0x0aa2a71f79e27788, 0xbacb30c34c7b03b0, 0x815fe3e2ce70f324,
        0xcea00a913c85510c, 0x25db61e18562f392, 0x3becce7022f63746, 0xfc11811335695fe9,
        0xbc0388be2220f385, 0x4084ba9d4cfd5718, 0x3c358d4865a063a6, 0xb877a744307316ab,
        0xfa020c8877e2e936, 0x92d94246dce3aa84, 0x3f4d8daa99f703aa, 0x7ab42a48f03faec8,
        0x0e582c6b8014c57b, 0x0027a74a0958215e, 0xc5b0e19cd1f8f867, 0x5f5f20c0dbd07638,
        0xbbc35318bf84a2cf, 0x6868a463d5ad4568, 0xcba6cba9e5f8542c, 0x127dd7ba91a876f0,
        0x9f69b44ff30d47d3, 0x1f6c11f86be63b27, 0x30a6ff1c922776c4, 0x08624865d24a0709,
        0x2809fe4b6348cc31, 0x7f14d0fed5777d77, 0xec57f1b8cf65e59d, 0xa195cf03ccd64aac,
        0x25f9a6753c7685d0, 0xe25800586076a271, 0x2b3b04b01fccd0e7, 0xbbc258c31d96fe58,
        0x0bf5cf894e8333ad, 0xc7a5ff4dda3889d6, 0x66fc7106153ee8e5, 0x1c81af9556d6ca58,
        0x1a4775937cbbda99, 0x99d10d82619bba86, 0x785de3fcf7e62a19, 0x1cb981809053fff0,
        0x679abbcec10194df, 0x6e9a15710bcda8ba, 0x9fbe31161913a9ff, 0x0ffc7681efc51cdb,
        0xd2e637119e2decfb, 0xcecd0faa231ec979, 0x51398fa0d899a29f, 0xd1f0e0680e749b86,
        0x38a6783ebed82b6a, 0xdf73ceadada67545, 0x623388d91c8baea2, 0x999e41aff30113b6,
        0xa41012581b241f3f, 0x31d657f1f8ddc47d, 0xccda2a05c974b266, 0x6ce987d161f50161,
        0x17b69098554f149d, 0x47daa5f9b6207944, 0x5e65e8ca2939a977, 0x7e1f70fe87fc6df4,
        0x5d493fb1fea42ebc, 0x4082f7a67ed0a606, 0x0a8fe2540eea0cb4, 0x636564cb428b1f12,
        0x7e37da9cd2db6297, 0xfd4d720df2066206, 0xff8f9b617c08dac6, 0x766cfe488f75d723,
        0x94c01a9e00ddc8ba, 0xed016bfafd22450c, 0xce28ed1f3feacdcd, 0xadec0d2d6b8d99b6,
        0x662b72bd936476a3, 0x7fe8d3f9971e9886, 0x78e47925f0c0ecd2, 0x4135765b647a0d72,
        0xbb4069ae145e2bff, 0xddb301e74cf7e0e4, 0x188bcae64f6dc217, 0xfc57643a53dc7d8b,
        0xef55429c78679b8b, 0xf9c3d67070e46d7d, 0x59c307e4a8f6b81e, 0x06eb96d833ad0c13,
        0xfe67cad503176019, 0x96d79804caf9a5b9, 0xfecd88451616a6f2, 0x47bb19096a48f3ee,
        0x92041d5404cc19c0, 0xbe79846c12957444, 0xa3116d6f3ce0512b, 0xe8d1a1629440be2b,
        0x3604f30b1dbfbaa0, 0x58a4a24f09cb3873, 0x949f12348ff1093e, 0xd7ed379c328ed1e0,
        0x6b93e3b0b2f60645, 0x037ebc4b008febdf, 0x27fd2ea48258727f, 0x0a997380221ef447,
        0x21ef1afd1a347c47, 0x95c2219df4327042, 0xc478bce8ed11a7fe, 0x41519ce7c1ff11f1,
        0x10199c843aca0828, 0x68ce233e096e00b7, 0x2f9fa62a428a6b5d, 0x951406d5e17bc0e3,
        0x19c7a489118ff327, 0x4746733f7273f0b2, 0x14a416becdf11867, 0x5aa303b1cbdc7c12,
        0x9a1acb3ded414524, 0xf37069d12bb8f989, 0x60664a7133656759, 0xf87515a59cf4696f,
        0xa0cabf7b3042cabc, 0xfea7aede90092115, 0x5c2e2511cc10a04f, 0x035f6f329d240bf6,
        0x887e04f792f95b71, 0xf29dc331efd08d6e, 0x304ebedc63cfa5e4, 0x8d02430190a9faec,
        0x9a5fdafd40d79bbd, 0x843c12bb6a1be308, 0xa052a5552cdf203a, 0x722e0050a029b0bd,
        0xfca4735ff67303e8, 0x26ef773f82c555c3, 0xc8b45a9c8c28aa65, 0xc72023ebff63aa76,
        0xaa54aed9bccfdec8, 0xf00cdccfa5d1f5bc, 0xef9ee31caaa8e601, 0xa75183bd190bc675,
        0x07f76845bae57d17, 0xc569905e014b2a74, 0x8f143c2bfdac73de, 0x9562a676e196b571,
        0xd1965cdf4f5f1d7d, 0xd0656ed5cbb70c2e, 0x51ce999a6777357f, 0x65126014f08350e2,
        0xef92df9d60cb7678, 0xd2432cc96c875260, 0x36abf4b701bb44fc, 0xd7394080fc5985ce,
        0xb83efd48b346a205, 0x03a085c40648051c, 0x4e7bc2e894948d8c, 0x54c5dd0cc69bc041,
        0xd7c227fcb62c1f94, 0x4cf23abf0e3257ca, 0x3b46fd3ca2e28316, 0x7399890a3ad5373e,
        0x5ac0001b2ff28c22, 0xb412928bb142da8c, 0xa4df329065f62273, 0xe8b4574423970884,
        0x040298b8f38df3ce, 0x03b60593a7c5cbc9, 0x8e012416b470105e, 0x881a62faf5f55487,
        0xfe056287dee162b6, 0xdace23229c19ab57, 0xb7e5993b1528aee2, 0x2f21a48f666431e4,
        0x7474e113978cc1d6, 0x247a5c495106c85b, 0x8039270ff8a34d9e, 0x39cd2d07c898a018,
        0xe19d7e83bb6e534e, 0x69b28d878f001365, 0x86351ac63e466b62, 0x9a78baafc9130211,
    ],
    [
        0x5eeba910b3e2087b, 0x5a056a90bd74c70e, 0x04e6461ed88ae888, 0xa264ef4002d0aaff,
        0xdc87074591ee75bc, 0xae61b637f8ec1151, 0x9e14c6a256d9e00f, 0x44168fbc4e933b19,
        0xef209f445b91b644, 0x13f6bbad2a08a1dc, 0x505753ee4ceff1c9, 0x366d078177ef7f67,
        0xb165f92a8b0911d4, 0x8814ef0bfb48bd3a, 0xd9f21461384a6b54, 0xfbf7033a675b47a0,
        0xe1f62dcf2b63d538, 0xb1097d409fc6be25, 0x047e24228e6dd02d, 0xd54d401cacde8286,
        0x831b977a077a59ce, 0x7179273cc9c983e7, 0x57a1bcc5796a8ee2, 0x113f094b89b781c2,
        0xac6603659ec27fd7, 0x5b244172ba9f354a, 0x1c4a655aacd14cf5, 0x4617dc665ef86f7c,
        0x95ef41b813b897fd, 0x15c876b237a2b813, 0xe9cc014d97c201f9, 0x98bb15ecfe73e699,
        0x24d90a57643e479c, 0x8b99db047095c3c4, 0xa917327df0887da6, 0xf9b90a9e5c6b2929,
        0x4ec7f6786e9fe6ed, 0xa61dc03fca9c987a, 0xad47e14ea3976c07, 0x05de3e119224c152,
        0xcf1ce89273f1d3e0, 0x93acdd066d9a3eec, 0x8ea1e9739db25177, 0x2db3f5df1ec6db6c,
        0x79ac33cec02ea084, 0x0480e772d1b6f356, 0x793831fc8649bb99, 0x041e0aff9f102fb3,
        0x5ef2a63ba5d1bd04, 0x58c722378c0b21d4, 0x9f449967c47c53f8, 0x53b4bfc70d43ffad,
        0x4eb2d6fb02384b34, 0xedf1b0aaa089583d, 0xbb8a1899106defe3, 0xe70af958bf881f9e,
        0x8ba59933a4ba6317, 0x38253d405b8304db, 0x6633e398ad46a05a, 0x741bbab9dd191356,
        0xc4020eff4a993816, 0xb0486aae173b5583, 0xbc3ed8d27b9374ac, 0xabdf5f7341690d1c,
        0xbd016dd344a61a33, 0x44f7d00d8af672f3, 0x112d204a9be2d7ad, 0xa678c07d6e679fe2,
        0xbadbf94064f20e50, 0x415dd36baadc8545, 0xa228491cfa1f60e0, 0xaf2db74ce54ea969,
        0x808b930a50cb02b6, 0xa7131e4a7f2dba7a, 0x03ca4571460710ca, 0xfefec9472b6340c9,
        0xdde855eebfb37459, 0x1bbbe13ec508309e, 0xde4831616cfe9311, 0xcb3669c46542378f,
        0x395681ddf44d7bf9, 0x02d33d19923eb7b4, 0x7b3bf0e61f290d6a, 0x80397794e7af01fd,
        0xee08fb0c894627f3, 0xc7d27357153f58d8, 0x22a225302acee09d, 0x996bf893013833a5,
        0x3c5ca1a90c56cbb1, 0xaca4e9d3eb653a5e, 0xdc72f5bcef47548f, 0x51de8430cedb5377,
        0xfefd495f2a98ddd9, 0x9b52803e9c3c821c, 0xec04a52ea635f472, 0x7533abdc47526489,
        0x048b27cbb98578df, 0x65196441897faf50, 0x49965f78e3f9fa70, 0xd552e84c22fca36e,
        0x28d295782717f8b0, 0x78201cb8e64b50c1, 0x82b1f882d905b6b4, 0x2fa9a474ea8fda4e,
        0x765236c622424580, 0x7d97f7949832dcfd, 0x659cccb8ab8802df, 0xe9a3b18fafdf29b0,
        0xe7d067538e02ae2f, 0xa5810f2556320242, 0x91cb00575ba4c1b6, 0x91b3a87c106ae748,
        0x5f4721a2b6ca2b79, 0x9d51a9962b15a1fa, 0x5dfe8c768775e16e, 0x143b0b4804dcf047,
        0xb29337a805be47f3, 0xb1ad1a57fb08add3, 0x6f23dc7a8683287a, 0xd4cd35adc4e58ec4,
        0x0c44b6df271f4aa0, 0x58c50c3be422af76, 0xb99e5784b585e241, 0xe8fe9161c43954a4,
        0x00a9f5de1bac14d5, 0xf88a2f80bf222673, 0x8dd2d56d77a3c020, 0x0e857a78f0edac8c,
        0xffd1f08148cd5c0f, 0xdc25ab68ef4e9a48, 0x952dc813db558427, 0xcff13be7fd88bdce,
        0xf3ea437f49d3d417, 0xed21d17669d0985a, 0xd540713e8782a9be, 0x36fade13aeacbb56,
        0xc5da5e86099f684f, 0x751dce487864f5a3, 0x0cf72dee5480abc0, 0x7ce3a056097acf63,
        0xe672eed43d9ce36e, 0x7ddaf06167709c10, 0x593dae45889f43cc, 0x96abb0f7125ec248,
        0xf02eedf754aec359, 0x9e25200c1f58f545, 0xbcf326fc6a99a6d0, 0x94457d07f615a8eb,
        0x213605072f8553f0, 0xc02730694f400bd4, 0xa4c2cc0366fa2911, 0x26bc6210c0b9cf6d,
        0x01c5dce1be9e9ec7, 0x6ff6904a514809f2, 0xab07ceff0b3ee6c7, 0x0dda704a737381b6,
        0x09cbccfc680b12e8, 0x40f2268ccb3d6ff1, 0x6aac504aa538a84f, 0x4b269607491dcc6d,
        0x0600f93fe53bed53, 0x5d23d7d9dd5b64cb, 0x02ed227d4f10b31d, 0x6b23da4f9eabcb58,
        0x6a713c37d4cc149f, 0x45a23c251861f4e4, 0x7a1b9d7391382bac, 0xf5c8df05f48055ec,
        0x0d223937d939d063, 0xdafa9a440cc645ca, 0x2bd39c65004940ab, 0xda633d62e63a9ae9,
        0x05fffd7d94d526b8, 0x6cf6c9c364073c03, 0x44e93dbd270ec9e8, 0xfd969804c426fa5d,
        0xbdb27b7c9f484f78, 0xf5201743ec755eda, 0xb02813a1336f2194, 0x65d16216d4500bf4,
        0xfec96fc06b744f9d, 0xd6826d03e1ae76c1, 0x2cf0199565d96aed, 0x3889d3d95a531924,
        0x51f4e88fbd64e922, 0x7f7ec0d1bf95c27a, 0xd63106a4ea558424, 0x6a711fa965341d90,
        0xd00fce1feba7c3a4, 0x49c56f760b3178c8, 0x93ada73597efca8d, 0x59f40fcf8238cfb0,
        0x041c6aa02e6a8e94, 0xadd15cc3fdfb1069, 0x39b0165227e35200, 0x9a8efe8d617badb8,
        0x7bebd868c02109d0, 0xc4d062af97893f50, 0x5d3fcce8dcd55e21, 0x2970866584e6cd1d,
        0xd8f1dbcc4330c2d8, 0xc5af1b4508135109, 0x55d5a30ec19c8ef3, 0x26538c7caf306dec,
        0xf7da91e574bae261, 0x82b678476436f655, 0x8454335bedee221b, 0x6d5d2047795fc346,
        0xc64b6233a0ad5eb7, 0x2ffae306da51efcb, 0x1e3f38fa2eef8232, 0x34680480d22d9ef7,
        0xca77ccd10487171b, 0x23309c7f26262553, 0x9cc2b7fad85f13dc, 0x18e2d3ac6a88f1cf,
        0xdc21b01a386edb4a, 0xf87a329b96595230, 0xcfa88319bb501a28, 0x83a44653008f4671,
        0xc1888a21167da5dc, 0x689f1696a1573601, 0x4d0288e35762fe7c, 0x325ec2a077187363,
        0x1fd57dfc0aac585f, 0xec734b06e95fe601, 0x535b4386b6120be5, 0x01111d075d4136dc,
        0x4804e04f7dfdf8c6, 0x10f19f4fc4ee5d82, 0xcc84a82018178290, 0x48bbf43a9e23a599,
        0x9a21beda7cb2fe2f, 0x1da27ddfcfee0817, 0x57676876d9419db5, 0x0922b16d38d13c8c,
        0x4590d6555ebc46d0, 0x7dfe137b46a6bfbc, 0xbf2ed01ad139d219, 0xe624f1cd28f95b76,
        0x2b07bf5bb085b4ed, 0x0c845fa3933800fb, 0x90ad3ad55636498b, 0x960c79109ab1e4cd,
        0xc3de2fb0c8c9afc3, 0x3070cd2e541462c8, 0x4e4cf7e9dda4ea18, 0xac657424b4ce15ec,
        0x7279df949095769f, 0xcb7c3a8c6041df33, 0xf0a5f9395df0e501, 0x09bd0faaadef2d82,
        0x2c6d499314b537ab, 0xeab47059d77d1406, 0x072bb2d037974cd3, 0xdcb54f67511d41d2,
        0xe09c35c5c4ac3d91, 0xb1f4fd289f3033bf, 0x8b89bfceff02cdbb, 0x1388a815ad5a22f4,
        0xe6c8d93cd16bb240, 0x4d93ba1a337b81f9, 0xa176c34e35c87b90, 0x6f7ff1e1b692df97,
        0x52e8cab5d8608776, 0x3c4d75f74f08636e, 0x9e47641b86541f6f, 0x8a8bb55e287dc8d1,
        0x1f67323cb741c8e6, 0x2a5601c603712e64, 0x90f3fb433a2cbced, 0xa6c6c9e88f5cffb6,
        0xc65093c7346b086a, 0x7e6d76c1c0b011f2, 0x9890780e15bac529, 0x04d4b3022c489ccf,
        0xc17d20c207e11059, 0xf26b6e11712d0314, 0xf2498b8ace152790, 0xc0ff2b3ca21a2d35,
        0x47e02a924b1dde01, 0x39ebe6eb8d4bd051, 0xcec9c2e2d8f03f7c, 0x71bbb73e38401c11,
        0x2a2049123bb290b4, 0x8d7566dd8e921f56, 0xaa8539f034cbd09a, 0x766faa197e9ab865,
        0xc3d7212171d0e4e0, 0x03a5f53f0b5fcde9, 0xdff21a8acc1bf98a, 0xfaa80059b3642a09,
        0xe7c6daab5c931aa6, 0xf1520547f3f055f4, 0x1123c6f6b4e845ab, 0xf593f034148086db,
        0xa559a5711ce3a7fc, 0x0c1e631901b8dd49, 0xd52058a36d6f237c, 0xaeb7e2707462c8e6,
        0xfb79c066855f85e6, 0xa5633fa0ba59baf8, 0x39697e05c9d68198, 0x6fe28cce34f2ea56,
        0x96b8ae73501b62ab, 0xb6b66cdb0e82418e, 0x095acf96c7c647e0, 0x38b7ef7ee1d08c70,
        0xe8ccc3ebcc6dd0a5, 0x7b03c85983e6f4da, 0x72ad201fd2d0316b, 0xdbe384caf41e1344,
        0x098c17b6eaf8c8d3, 0xc55595c035364c89, 0xba17aaef59dacce3, 0x2112f27e21ffc303,
        0xe9b2b5406b898739, 0x95035846993b1a7a, 0xa7c86e7e7bd74e40, 0x3f036ac80e645117,
        0x58298105634767a4, 0x088a49bbebb8b8a7, 0x1381a99b3e854e4c, 0x8f821400fec398b3,
        0x2087141afdab9bbd, 0xb995fe9eb7c163a2, 0xc1d80aa1f9508f35, 0x5a68c1a26ae66307,
        0x13c8977116e56f5d, 0x9949b2f52e251e48, 0x89b2e48f10c9d6fb, 0x9431095b448823ae,
        0x8efd4661c92c91ce, 0xac1f03623e3f9b2e, 0x895ed692cc8dcb75, 0xb968f2c7bea5ee09,
        0xfcf8ecc9e957b243, 0xedbd8398f680676b, 0x94202e0e9f143ba0, 0x11dea4bdc3673dae,
        0xcf74be6bbe613256, 0xb925cebff96ee39a, 0xd84060071caf39d1, 0x409c2598a79e918e,
        0x0613b7ca44af3e0b, 0x66f05f5c07d17d59, 0x3098d752e0c98d62, 0x879fe49c4894d378,
        0xdcac95fcd9613190, 0x5d8a990cd992335a, 0x6f7e0e942619bcf7, 0x1c105b4ac25a9448,
        0x5ff10dfbf612fc4e, 0x0186ad22ebe35310, 0x5b52a09aeb1634bc, 0x1de667f45f49d533,
        0x793e411da0394f29, 0x69ae26b3006ccf49, 0x63216635b92e3b08, 0x0173a87aef0a2b62,
        0x7fd6b2551b060dd5, 0x8267e508d91aeace, 0xd9812dcdfb4a9a7b, 0xa98c96d8a01b6984,
        0xbb3f0a6d7400ed08, 0xb703e5db5fd4929a, 0xf04439cfde2b6894, 0xdea55947d230f37c,
        0x0b1e003a3ba64e23, 0x875258e53ae3eeb7, 0xc90ef12b1f57c069, 0x64ae69e19806e01e,
        0x0329a9b971d7de7a, 0x5b39a80924bdb487, 0xd645115061de6cd4, 0x9a1aed235ab8bb08,
        0xe602ff2c1aa841d1, 0xd1a72aa72a6eb1e6, 0x03dc5a07e907c457, 0xcd2214dd395b69e2,
        0xae53e6e329dbf826, 0xd6446e94a9b83efa, 0x7bff56135b52e0ed, 0xdc4e833e7af5fdcc,
        0x6120e7cb1040c2b5, 0xea485869a8d2861c, 0x68185218999efd2b, 0x85a6a565ff4fc2da,
        0x8dba80ff20a3b470, 0x447eff3b5416e4ed, 0x14f7e7fc92302d47, 0x85bc544ce7685f20,
        0x7d7d802ab135282b, 0xd04979779bd98853, 0x9d16382b0860915c, 0x8358087a7970fc51,
        0x556f0b1a78e73c42, 0xcc7e6a0909184b5d, 0x9857d71914233aa7, 0x2f2ce735844ffd6f,
        0xe1accffa1ca48020, 0x38517fc28d7fc8c2, 0xbd574712885e4ed5, 0x8fbb4df558cdfe41,
        0x06f185e6a5fe18c1, 0x6df5710873944251, 0x7ff5006484c0822f, 0xffcf65a0b6917e22,
        0x644ac7081c445b6f, 0xfa1ee673e0f81731, 0xa41a07940a8681b3, 0x8875eef9eab186a2,
        0x4df94f62709c76f7, 0x6339153a20dc4f4b, 0x178303dd0dd338d0, 0x0b6b89630531b5ba,
        0x9edf4b23b5a7ec79, 0xe9a65eef84846603, 0x60f8690da3f61fa2, 0xb326877617525176,
        0xc0741c0d79ed9819, 0xe96eec0b33d8d4ad, 0x748be745183879fb, 0x90ef01323fbabb6f,
        0x4dfbd210c5afdf1a, 0x86a2cedc87f43f20, 0x879890d153bec56e, 0x5586e0d3297c242f,
        0x46f4c3cd67fb3683, 0x09eef835d7515518, 0x65b7a04a1e6b8e6d, 0xd5e336f2f92f2742,
        0x43f9ec0093024347, 0xf2c30b1e1a8f2b3e, 0x52f518781fb85cc1, 0x074681846796b923,
        0x459fbc8ce357c4f9, 0x70017570453bebb7, 0x12432dbfc84856be, 0x375a041f8561df1d,
        0xbe4e49268b63ce81, 0x1fa941dedeb98a3d, 0xa59f6d63a9800bc3, 0xe4b503c98670b06f,
        0x634606c7c8438b2c, 0x1d1a71cec4424fa8, 0xc8d0bb30053af1f1, 0x67d859b23d7bab2c,
        0x32a661efa713589f, 0x46dbfdaf6b977fb5, 0xeb41e1bb86dc62e1, 0x681f0181858dd4f3,
        0x960a0c7b29d3a8d7, 0xd76603000bf4a8e7, 0x459372ba2b076e72, 0xb3f42e6d0f65eeec,
        0x69762c39e9be8a20, 0x09d8e627909b0e84, 0x770ac417f54b337f, 0x95299959413509ac,
        0x7d326b7f16101f96, 0x1258b265b4625149, 0x91b1a2ab48166d5f, 0x7931b87727e40ac8,
        0xe1f297924047bbeb, 0x55a7fcf95c3ab05c, 0x2404c223396f938d, 0x494251840f10a70e,
        0x8d2cf4f52b57ce3e, 0x95419b24589d90aa, 0xaf14ca4b155f1280, 0x8036897fbb4f8f3c,
        0xb5566f0f87243e2a, 0xf41c1042d12804a9, 0x0e58807623587932, 0xedefe27812a382a9,
        0xc8c3a8aba5cea926, 0x0b07419cdc5d06ab, 0x6b58c2b18326f40e, 0x32691f112db1a579,
        0x975165c7d87706ab, 0xe99e5188a7c6e5be, 0x58a02566b863c790, 0x75b0b102da729fde,
        0x3f2ba70b24d5d992, 0x00765f0c48a4fc2c, 0x7f20e1f0a73e9ada, 0x56ced09a21ade107,
        0xa74751ce1239368a, 0x7dd0e67007db2f24, 0x17b7f1517ac5d9d9, 0xbeddd1abff587596,
        0x62fc1931d19804cf, 0x2e596aa8a0e3b067, 0xce3e9425ce35ae6d, 0x86852e3c1899c751,
        0x3c8c0c7eae180a03, 0xa10b3843250f3328, 0x582cfd6725a125ad, 0x6480887a70af1e64,
        0x80287f50025fdc97, 0xfe4e6206b8ebbfc6, 0xdd4dca98d2a8378a, 0x19f7a238b7685c1c,
        0x85de277afcc79573, 0x1e9607abeff46690, 0x294a3827364e1ef7, 0x219a678ac4e13ef4,
        0x268a9ee4fabfd429, 0x8d814c4d3d08b8d2, 0xc5bdb8f9840bcb7d, 0x92489b235f8b32bd,
    ],
    [
        0xe412aaf7b9e2f9f8, 0x8292d96d0b054a0f, 0x83fb0f3762d7ee7c, 0xa433bd2e5a26a1d4,
        0xe6e067ab426c1aa6, 0xbe51975703fcd3bf, 0xccea6f5332845ab0, 0x5cfd3a693f11fc00,
        0x582164f75965615c, 0xc9536d6bffb3df08, 0xa277a87e5b095e01, 0xc192342d86b383b5,
        0x1b8f6cc330735384, 0xc08c85e50e6c8579, 0xb93b3032db088764, 0x799acd7c64ca2efc,
        0x134fb08e59ddb7cb, 0x8740af505628ad08, 0x8012736863e27b64, 0xe9c0ba8516a010bc,
        0x21690dcaae504c31, 0x8140768796067f64, 0x4f6b6b6d7b1308da, 0x305165d10a020be7,
        0xb346dc71441e7150, 0x4c6408f9a2ae339c, 0xce15c84daab9dbe5, 0x70cbce8b62a0b0ed,
        0xe7316f997d665d26, 0xe79a4f63ecb1ad25, 0xb62320836cca58b7, 0x7722cb400c11e65a,
        0xd60e5feb3225b585, 0xa9badd09a1a7e0c2, 0xceece8353541b5ae, 0xa90f77ca20d12c92,
        0x736fee4c5c483906, 0xb1769248b7569543, 0x0fe0d9756d8aa314, 0xc93cd7c1da9dd111,
        0x0db508dd0243cd83, 0xfb4b03bfda2bab5b, 0xfc0a59363b97d1e3, 0xd5f023a3113890f6,
        0x0ed2a8a218d8c6b1, 0xab0507c856aa5af3, 0x4309f3155c8109dd, 0xc9ed0cf8d5b13b2e,
        0x83206b9d96bc118d, 0x5142e8ba5c4b4c63, 0xe43c0b44aca52cb3, 0xa6c7b0c55ae301b4,
        0x17b0eb72b30ec0ff, 0xf9cb017897067006, 0x78800c35ecebe36e, 0x78d559bf3832d713,
        0xd1f9b736d73b7d50, 0x7671e5fbb6f7c64d, 0x7e48021d87dc6a3d, 0xfee82fab30fcdfd2,
        0x177190cc0dc8d031, 0x868001eb5f896ed1, 0x64799f46e9c400a6, 0x11cf4c2e24424a48,
        0x0484c1aa0ff419ac, 0xa978af8874b9077a, 0x58c2282f9a3bcb7e, 0x1148bb1dd1c2d78c,
        0x431579d2b11d1280, 0x3f9dbd8dc8c7b62f, 0x792bc0412541c834, 0x1f2b5d018bc8eade,
        0x2c9dfb600472cbeb, 0xc95169ce6dde9e09, 0x968bc95183a51a95, 0xe85f303f706b01d5,
        0xc35c5a82e4f26c08, 0x29d04ad48d991759, 0x567fe1c3a78e5943, 0x3397a15b4e0bcb6c,
        0xe937c6633ae8f816, 0x30a233db8b1284e8, 0x17b7a4b2d2d21879, 0x2fd90fbaea4f3e8e,
        0x2d51ead4698f629d, 0xab2c270677a62d7d, 0x0f2faaafd0e33069, 0x48560411f66eaf8b,
        0xd9505e7a55fd483c, 0xf9ea4cb25a70ba33, 0xebb54d523940eb15, 0x92f5dc330abbc9be,
        0x59a7ead9800fba6f, 0x1857cec76948504d, 0x55faae6b76d0c53e, 0xc94a7f5268ff2be5,
        0x6cbab39c01b56ad1, 0x0a9a339b9f813289, 0x2f7429f58256c750, 0x2e278e0e69d1739c,
        0x2325cabba3f651c7, 0xd29cc9d2d85f4d72, 0x9bf9aed5ea664a8c, 0x56b625ab28c9c1b4,
        0x3b12c1341349307c, 0xfbd4908979b4e6c0, 0x00f0f2831aa091b6, 0xaa4f9058a9d2491b,
        0x67ee6037632b5b07, 0x354cac5d1bd2726f, 0x7a4ec14ec5799833, 0xdbd541bbd18d5a28,
        0xb1a4d7bfec7bfc1c, 0x90c3e2e3e92ee291, 0x1244642675443f14, 0x6f5d42b1bd2d3f1d,
        0xbce593e25e6424f9, 0x9ae132af489d2a39, 0xd93e24232234ce8a, 0x04f0b57bb6e00e15,
        0x652ed78e560bf0aa, 0xf040c0396e0a44b7, 0xa2b5516b28ae0f74, 0xf36185be36a6990b,
        0x3e21cd257fc491eb, 0xc4c003f591dad4fd, 0x6c5176e7a9c245de, 0x843c73ee37d4471c,
        0x9d944989417bcb90, 0x70bd185bfff1d49f, 0x79f77476eac2ca5a, 0x4aae419e64102515,
        0xb926943f2ead6552, 0xce91fce6fc476e0e, 0xd726425fb1336aa7, 0x5160359ba6b9f7ae,
        0x36eacc3f2266724f, 0xcb050de7cc085766, 0x3b375d4553aff355, 0x19e1921388cdcb89,
        0x9e0c933bba98f626, 0xbae8f1633a8ccd69, 0xba7a7acfe359cb34, 0xb9b10ced0358a26c,
        0x083f73a7802ed184, 0xb3982d7357acc8cd, 0x7dcced3743cf40d4, 0x8af183714570a1e5,
        0x2af3eef1724c9cbf, 0xbe9c1edfae19786b, 0xb461990f0d3677c4, 0x5ff898ddffd2380e,
        0xca96e59f94302331, 0x3eaa93645cac2af4, 0x69b649c7a2fdd11d, 0xbb92b7d3f369c2d6,
        0xfa4d2a2a08a2cb88, 0x03b7b3ada497922f, 0x64ef60e240a8eb5a, 0x420085cc8d9f9352,
        0xcb55a9cc37d6d1b4, 0xabf1793fd4cda45b, 0x456c347888104f8c, 0x29d24b445c1f9e82,
        0x582324df35b94e45, 0x89e1fd0c10a5b6dd, 0xef8bb98996fad9aa, 0xeff436ae3769f3a2,
        0x8296aa6d61d86bda, 0xda1a010886806aa4, 0x505e183e13aadeb0, 0x6d82393e16d175a3,
        0x7eed42e521a89b8d, 0x46e85e16b864816f, 0xcb768a63a8132b78, 0x6b78c887754de9d2,
        0x753f98a6b6b41502, 0x6947a55a8f6a076d, 0x0d14e885ddcc00b4, 0x4eb12c0915c0c94b,
        0xa5d829372a73184e, 0xc7c46b356a2da1c1, 0xe4cf5ceefa95019f, 0xd6c9cb16e80add3a,
        0x58e71e3350e3fc4f, 0xf430f59362b36088, 0x84412003705132e2, 0x88f343f63d33027b,
        0xea0cc90e0d929039, 0xfb4782b2d9ef80b4, 0xbd97c80c93503700, 0xb3047fc5617a488b,
        0x2b73dbe3fe7318ca, 0xbe6d08440279eab1, 0x7e80c351579a262b, 0xd03b993966489384,
        0x8fd692bf057fed1f, 0x2f140c732715393a, 0x85b1d21e3ddd6256, 0x1e2601dcfa696463,
        0x253eb08c5fcb8868, 0x92fce77e0df088dc, 0xb79d7ccee1ebac06, 0xe88f19432ce0de2a,
        0x498681004c70aed7, 0xade665391790a49c, 0x38f4fbfde2c3827e, 0x0a30dbbe4b8ddfaa,
        0xd4badd858cd69f8d, 0x211d53d337c5ff03, 0x999bbb8097cf7c4c, 0xe869e8f77cca9004,
        0xa6181e6081a0d4aa, 0xa313f2b2887814eb, 0x55c9df430e6a876b, 0x7da35f08784b4b11,
        0xcfde701c801930cf, 0x62686d4695eaea09, 0x4e2d17823f6ade80, 0x70dd90c879ef83e1,
        0x2e7d3babb441995d, 0x9df2f2e438930f36, 0xc68bc678e8f22c94, 0x4addb986ca4b2544,
        0xd7288c1efbce1d89, 0xa9830a12c7378a84, 0x8a4355888b23da06, 0xbf4fb4cb647c59b1,
        0xeacedb3a45598c64, 0x501be0aea693a796, 0xd07dce3504a0e441, 0xa0d8d46bcbd31a17,
        0x1d5c8a4f630adc96, 0x281f76aedc078112, 0xe28041ada55b3f8a, 0x1d1e00b2671e2aed,
        0xd99942cf33e6da02, 0xef2548f6d1840add, 0x229106d1b416c77c, 0x7d32fedb54651568,
        0x411391104c5187ce, 0x9acdeec161964435, 0xb0f5f11d6cfe5734, 0xf1c4038628618c41,
        0x23d2857aebe58773, 0x0993353bd95850c9, 0x21396d3771e13748, 0xeabfabc55c7b1d70,
        0xbfaf5f4455df1ad1, 0xa85b4bc994c7c0ac, 0xc55f69cfe243d1fa, 0xb775dcbb38ae16c6,
        0x5f7e62921dfc37b3, 0xb9edb975323e4fc5, 0xa92d9ee5ffbe539f, 0xf2a91709e3cf861c,
        0xb91b71e552dd7b0a, 0xa8fffe45b8ed07e9, 0x19e67272edb4f0fc, 0xe21d58b1d61a9919,
        0xed11c0ede9a98fae, 0x8a149a94f11da35b, 0xd575bfa8d9b1ba0b, 0x7f5ac6d2915f6084,
        0x749a0577760c15b3, 0x10c124ca88781592, 0xd929e1a6022995b4, 0xf6fcf8cfe453aecc,
        0x711a3aadb7f26c66, 0xf9f5bc8c45915cc1, 0x761c36d4c90abad2, 0xa70e9712e20f6fac,
        0x2d8bfaf5987f389e, 0xb6371f1bf6578d40, 0x191c84e56bafa0b0, 0xe2c8afb72dd83019,
        0x580982c7a94f6b05, 0xe2bc4c1f08fd3c04, 0x5ce9aaa4316d252a, 0x50f53e2c38fd05c7,
        0x02fc993673c31e5d, 0x5196e88f3e771722, 0x0f53ac9c2327f7d8, 0xe0b331537937ab45,
        0x390988c993046f2b, 0x355e4a7a4bb5927c, 0x5156dc1c10a0416e, 0x3c6ceac006264a47,
        0xcb516843162d4b46, 0x1ae11c32d28165b1, 0x6b6c14f2d817ce6a, 0x9c8ea39d90ffd733,
        0x674e1740de9ea8cd, 0xc70965b6e490e600, 0x53bd2a16b3c5eb81, 0x241693fac80dc873,
        0x9d01dc28a30a8ae6, 0x9f662594e0fbd693, 0x2e0f76da086c2d23, 0xd47c4f2840018bae,
        0x759ec79e39971405, 0xe494ea07c3842f43, 0x1ca71df6ded02f41, 0x7f3196800d37c339,
        0x56e9e218587a8213, 0x56bc8e4c181dac35, 0x0e1601641013afcb, 0x30302333c0f55c25,
        0xe3f0f676067e1eac, 0x6c313a57a25d52ef, 0xeb0283500c32fdad, 0x4057086698a62cc3,
        0xefe8893b9106744f, 0x07d5c40c16b54fff, 0x758c0f716a8f80bd, 0xa107b9f085a82e45,
        0x66dd6ddee23bdd04, 0xa2ec9b6c53ef4ccc, 0x76003d148376bb3b, 0x844444211c3a60f7,
        0xd61f8eea3954afeb, 0x714824a1cb920e55, 0xe142bb311fbbe9fe, 0x17618c364a0ef3d4,
        0xe2bc967a9bcb2abd, 0xf6a2be5e5367030d, 0xd23084e2b778b77a, 0x6e387789679176d5,
        0x71e4ce1e5686b036, 0x6429d30bc81030f3, 0x228cf7f428164ff7, 0x0dcd10b89a67b49f,
        0x786ea28d7dac506b, 0x63461cf04f2b18c3, 0xac1af4e775027c02, 0x87c7f732d11451b0,
        0x5338c0564454b1f2, 0x7f749beaa80dec53, 0x1d08c049917f6b17, 0xb877995dfd99b386,
        0xe8bea90348653ad7, 0x25387129e5a9d032, 0x7d98a8130e8e5097, 0x64b3ee8247ada3a5,
        0x4ef53a558cda0b51, 0x749518e87108b198, 0xf6158d6ec79eb564, 0x3a8d1f74c054af6d,
        0xfd95b86e08869cf5, 0x5ad3fd47636ec349, 0xac7796445c2037e4, 0xebc01a03e2b48ccc,
        0xf0aca3a615edb910, 0xbfd49acef71bca14, 0x83bf0acbf35ab86a, 0xe37a1352f14db3fc,
        0x30f2f42389d2b975, 0xf518f8af1bb6c5cd, 0x49e29fe2af178b66, 0x56083f643cd579ab,
        0xc555a7431dab8168, 0x1da897b049ec4ee0, 0x815b147df2c5eceb, 0xd08eac837b30838f,
        0x669a92c7174dca4c, 0xa6169c4aedf6c13a, 0xb6365d3ec1a1fc66, 0x22304d1f37d70b76,
        0x3b39955bad9aefd0, 0x4f4f2c0a7a824372, 0x4f570ca9ed9f4535, 0xa5e41426bd1c19f0,
        0x073ded2d50509d7f, 0xa6bdb2b293c852c3, 0x3164569761f1652b, 0x39ef8ff14abb2b1a,
        0xabfbd51e356d1fe9, 0x47aa73eec53a3788, 0x69ecf887d09b719d, 0xaff8b0aede6b9806,
        0x70e7a31764fa490a, 0x4af8b2caa77922b6, 0x2e75cc77ac564679, 0x74787a3626679148,
        0xaaeab13ca07e3958, 0xcd5c628aaf1bb143, 0x5c7d7cce95ea6cc1, 0x2519020d6fe8c0dd,
        0x1b388d6668729b8e, 0xb68c0d820269def3, 0xd44e739944bb1010, 0x7fb99f4bae26abee,
        0x47893a8fb710196a, 0x2e37721d09e20c50, 0x7bd129005d3e4608, 0xb93d5b4dafece961,
        0xd3a7ab1e43935657, 0xceb75a9cd236e848, 0x95e6d01cd4715572, 0xf0c967b1d5eece8f,
        0xdce384392f104468, 0xe6b3f730a9816ec0, 0x02e5fe53f4715c99, 0x1e3efc16f5adab87,
        0x0270614ca608598d, 0x7b3ced228fbc5030, 0x047ecd139aa3343e, 0x672ae316678995de,
        0xa934e268a269a1f3, 0x394107c429b25254, 0x2903bfc04536f5c1, 0x35cf7380b05ebfc4,
        0x0185b6be9a76537b, 0x5400730dc41b19ca, 0xd2e30925c7162aaa, 0xc430e7abea94fef2,
        0xdb998b5508a6685a, 0x9a3990dffc035476, 0xdadb89ba364b83fd, 0x3c9164a28f3e1dca,
        0x330bd76d9c8abe45, 0xf51d40bb76f6daa2, 0x62cf7a6224dced32, 0x12ee753b33fbd431,
        0x61fe0d147abe577a, 0x20d52a97fc7d1578, 0x02066c02673ba5f2, 0xa0fde6315dfe910d,
        0x85935ed79d1e7c55, 0x65d9cca3a460e30b, 0xf7c432a11431d1fa, 0x01b2709e6fb5e555,
        0x7428b03fb9947ceb, 0xd1958b99c1033f6b, 0xe5162a1273a307ad, 0xd5d4d4d7cfcc66f8,
        0xc22af8f0ca405a7e, 0x27ed916b7e9e296d, 0x9e1c6e0bf6677491, 0xadb405480c19959c,
        0xab03570b9eb1cbaf, 0xa63c5b367000d61e, 0x51b100f0a9b45194, 0x3cd3980f0392fad0,
        0x59c90f8110a03dd8, 0x73850e896697874b, 0x126af6c73a333970, 0x115fbd0653d9404b,
        0xde44203202a1ff49, 0xd151afcd7637dbb7, 0x6465a380abfdcf7f, 0x48d837d600b87a75,
        0x2144d67c6f74563d, 0x32d588198eecb775, 0x3d665388a91623fc, 0x4798a2fcaa409d22,
        0xe27dfbacdf51c4e8, 0x43e7f9caf3e3d604, 0xc57ac8732f97ebd8, 0xe232f34ac39d0b53,
        0xda7f5c1fd1b69e9e, 0xac653e3b847ce6c2, 0x5b06cf39d621145d, 0xbc62882aab370e2d,
        0xffd94d2783c5278b, 0xd26832fdf5423ec6, 0xa92c60850658f1de, 0x93105fe4aa3b191a,
        0xa7cae0f03d0d5360, 0xc22bea3badbf1bdc, 0x15cc7072939277e1, 0x74707460dfe96605,
        0x7ba4e5e07cca8542, 0xf9945ac13a315aad, 0x0a25518bfb9e9e07, 0xefb8dac258c2cd0c,
        0xa89563bdb6cd3d59, 0xbfeabac1555afa93, 0x7bb5275f2cf21e2f, 0x973bb6f0bd94aa8a,
        0x16b442e607811873, 0x0fd2b1536c32b72a, 0x2c8fcf905cfecaf3, 0x515c16f2aec86440,
        0xb97e89f65371c0c4, 0x83a83b675ec7849c, 0xcc111fba0f541e36, 0x1bde60add66c283a,
        0xe26aa4d8c8c93bb7, 0xdbf8d1576b1f4ab4, 0xb85d6a8ace043d4d, 0xfc16adf75c66d5c6,
        0x5f3f9e68a82055c0, 0xa6848e4f31e7dfc3, 0x30364500a5654387, 0x978b0d3efd5d1708,
        0xbbe82668be8bda29, 0xeeaa6604c83ecf98, 0x6a4316953321ae54, 0xcfdf3039449253c5,
        0x7a4ef5926df6a46c, 0x10b58337c7aeb09b, 0x4d18f2e574176c12, 0xd61632d7388b1f7c,
        0x92cfe2e43919012c, 0x04e8f53d91b9f09f, 0x1fb9ef6690ae0769, 0xdd829fc6f3cf7650,
        0x425ee6ce96d58314, 0x76e0fd723568523f, 0xdbfd01336b6604bd, 0x70fd33656244cef0,
    ],
    [
        0x76695c9b2b574b7f, 0xe1d7ec0f247fdfdf, 0x8fdfef1694d5f347, 0xb9a92d78fbfcf1b5,
        0xdf552b01bf68688b, 0x59b33c78af5bcab5, 0xe1f8d2e63d919304, 0x6f5fcb614b4558fb,
        0xafb66269d36cb503, 0xb258cd5ffc01efaa, 0x9f87147036c8e3e9, 0xcc4c31d0bf033733,
        0xf833e35553bec0dc, 0xdedab3515cb18391, 0x60a3b4fb68a19ca9, 0x4f02ece400e25a95,
        0xf7aec2689659963f, 0xee06dd39037ef2d3, 0x6bf9594c225806ae, 0x6e90b6a52528ec51,
        0x3e40461ee4d3115e, 0x26542e2aa294dac9, 0x192bcda52c175edb, 0x2c687134ca9bf60f,
        0x2ade8a7c34d3761e, 0x39d542aba83a8450, 0xa94e50ab9e0939a5, 0x2fcdaf9bd77386cc,
        0x8e94e7414c2084cf, 0xfaf0a1a5d52033b1, 0x5a7ebac566c1ee7b, 0x88abaa5c7fd181e7,
        0x22f16f6b3da8d94c, 0x1738a83b34a00e27, 0x6b7df06674de493c, 0xb94d547823ddd51c,
        0x02a7e3e34acd3c51, 0x7dad21d4968268ae, 0x722882f446464c70, 0x708abc8cc051e9f6,
        0xda660697ec6ecb9c, 0x2efa3bb43ead6eef, 0x2182bd9149639170, 0xb8cd4f408f14decc,
        0xed39152b50db3113, 0x3e957b36b57b9742, 0x1172b2590b412b3c, 0x791b2085894f7f16,
        0x6dc681407075fd9d, 0xd945a28b16205f2a, 0xe79eb6aaf8402027, 0xe21d5b8f9c4da5e3,
        0x647fabee57c062bb, 0x58917f6723d1206a, 0x80e4954427eb3193, 0x738967251454f76e,
        0xd659c8d64a7bd06e, 0x5647310d93a9f5ac, 0xa651959d3b9fc03e, 0xbd46937a3d19de1c,
        0xa5841c9ad5525ab2, 0x1b3d50331314fc73, 0x558e3750d3542212, 0x95792f06978f92cc,
        0xcca80405c369b6be, 0xfb9d90e74a23d1dc, 0xf31894902b04af0a, 0x17ce4fabe8427d74,
        0x2fc542cb8f96a57a, 0x0053d789496fbcdf, 0x09cf437c456be82a, 0x9602597b1f2545aa,
        0xe98b07d2754fdd67, 0x861688b10775588e, 0xdec7eb98b20d610d, 0xf37d0072ef211c17,
        0xc9ff72802803a655, 0xd3126ffc769ae948, 0x65c5719afac47c70, 0xef9474027ac1732e,
        0x67fb5260a0cb213c, 0x790d1b0fd522f762, 0x75a97e2157e554f2, 0x9196a7c90548389e,
        0x24889b503646fc40, 0xefab45af2a5dcfe8, 0x74681e0a59a6f637, 0x2473ea8fbc7da3a5,
        0xc591c889d825cd19, 0x634b9198dacb7c65, 0xabeed8102d9e10e2, 0x30f9f5a4e32d2633,
        0x4ef32d29a839ecb4, 0x7967d3f4b8626432, 0x59e06f4cdba62ea8, 0x136a0c9fca3ad1eb,
        0x28b276c52d150069, 0xe7591d15bf58ce70, 0x4d6bdaef79aa5258, 0x7c215c91130e78e3,
        0x217df736d30407b3, 0x07378e90be9c6fc0, 0x9b9b52266c3c702e, 0x75194e9f4be2d9ca,
        0x51b4a5fdddb8c619, 0xbd76b425d1b9fe65, 0xb9fb2b423299ae83, 0x95e90d8769e16a6b,
        0x6b523496b794e6b4, 0x92bfd61e82b72110, 0xaf86ca6f1d42a63e, 0x42eb80f2b5c353fb,
        0x638515664b203c44, 0xfe9112a7abadde7a, 0xbb1fa5e3ea6e7157, 0xb5e2220910bf3df1,
        0xcd6adee7cd5210ac, 0xc04601ce11062b8d, 0xd788e57aaf88f4c9, 0x52772de4425c87a9,
        0x678675207bd10bb0, 0xa67858616c05eedb, 0x05c2877298997a74, 0x71feede46f0be84d,
        0x3eed9ba803e02cd0, 0x2cf4cd42e710aded, 0x21fe02d702921066, 0xb11574d323196752,
        0x1f4bae99e3108ded, 0x7012eb2c190fdc41, 0x30e3da7a6d2ca633, 0xbae98ffdac66e74e,
        0x5a731b614edb340e, 0x5a5afe02d7883bc1, 0x6a01dae8f0c21973, 0xfd89ab3fabe5e469,
        0x1e0b425b5a1fe9bf, 0x72184b18fa46eae0, 0x15b9326f7b151f4e, 0x8967fe49ae35b246,
        0x300ff7aa42b99b53, 0x6c2f9ba8d3546ad9, 0xe228e088973e4cfd, 0xecdb65ac51149260,
        0x5daa0fef66d931b7, 0xf0659106f30c47d0, 0x0ea199f382b00b16, 0xf7e285c17b5b5dde,
        0x39e0eb1efa26ccf7, 0x6166857de642bbe8, 0x696df08b2d244985, 0xf54ef685b45fb57e,
        0x3ffd60ba39b42dec, 0x680cef7882486a05, 0xea8190fb4e6423d3, 0xa4fc8189382e7298,
        0xc5371755802f0897, 0xe837ca4b5574dc0e, 0xa2ea165e30944ef3, 0xe6e5e6c2f394aab5,
        0x49d20441643d3e58, 0xde2ace5a57d806d8, 0xe9709c34e2b255ed, 0x556b92e0ed547bce,
        0x503a31aee47c33cb, 0x9406a8722b329579, 0x4e3974bb8325964e, 0x031d69c1d6ab5348,
        0x80b87520230fbffb, 0x95f006cd5e527201, 0xbc993d59423b7ea2, 0x85dcf163c3c38fd3,
        0x6bb241b684630b17, 0x108b450bfdce7ec4, 0x5f89313583660d24, 0x377777f7df8db0d4,
        0x3071e924871d1be7, 0x7db6c5ee2bbf97c2, 0x457f33a24ebdbe4b, 0xb04dd106437bf2c6,
        0x11b4df3b181f674f, 0xdcc60fb6f31f7326, 0xf062c60fd944e00a, 0xe59e4516c6efb7d6,
        0x7c4e3be597838647, 0x2f5aa7c843950b68, 0x73e047f4ae2e4a65, 0xca2053667c4dc4b3,
        0x29449bca279fca98, 0x9159bc5d6f4026b7, 0x1636a1a246b90554, 0xc3249711b8cfcac1,
        0x9e715ce2ea133fce, 0x5c2bbff6ddced48c, 0x8d002aea4803814a, 0x6d548304145bb5e5,
        0x5143d103181cf578, 0xec9afe78fa66951d, 0x8bffcda8246d9ef8, 0xf1daeea2fb2e16bc,
        0xb4ac13e924fc4a85, 0xd17c9dea5003404a, 0xa624c23e04005d02, 0x8c4cbd665cb1aa9b,
        0x3b48a8db6a7c3f2c, 0x4567e48a69aabfb7, 0x122a2429cb63c89f, 0x6043aa29a9180d51,
        0x95457a7e34d309ff, 0xcd83214bb5fdc6b5, 0xde81a7265389c90f, 0x6335a624223d4837,
        0xfcad5d47a82af350, 0x3f3ad480ff6290a8, 0xde61a87cfcf577c6, 0x594e84453383cadb,
        0x136d4902fd9674dc, 0xab1d4d7716eaf88b, 0xc739d20917acb62c, 0x946923a1588af205,
        0xb0274ff1c49ae8a1, 0xf7eae2372c11d8ff, 0xfd5c7dfa3e21385b, 0x84d697d49349e4a5,
        0x3450c84a3da3a7fb, 0xe89e8110d0338020, 0xdba2653a7d0e7443, 0x0072da6b909f5c6f,
        0xe31863924912bbb0, 0xb27b5c51761f10ae, 0xd3ceff9daa0c5227, 0x1785990e78b0e490,
        0xa05874308848da9d, 0x00890f3b38a7dc3f, 0x03e416acc110039e, 0xf4fb87ba0c01f90a,
        0x6e9f8ae01de3ae08, 0xd8af107acc29c494, 0xe7bfe9a85a21a441, 0x023c096334c42ef2,
        0xe6285b5685ee9cd9, 0x3eb84a8fb5b54833, 0xf4e955e07a61b393, 0x807c5d041d055404,
        0x4e23bf4ef2a92b48, 0xc5aeef464b071708, 0x504463e6eb4a609f, 0xdddb8bf3d76bbc11,
        0x545c7144c5891864, 0x57580907a9d03b3a, 0x359e6c45783aa072, 0xfbb97d0de3e851cb,
        0x4990ec0f3f450c92, 0x403f947b2e62cc45, 0x8acf01ed0108cc04, 0x2061c767cf93af67,
        0x60d5205554c2ee1c, 0x8a93426a68cd7feb, 0xc15e311f95a0bfe9, 0xbf3dc6030992abe1,
        0x749ab5112cc936b6, 0x38f28b83728e56a6, 0x7e03a0d45d853975, 0xe699acd73a12940f,
        0xef693781c05a9c3f, 0xa879196692e7bf9e, 0x89fc2a8ed9cacded, 0xab0097db04840da3,
        0xf78c21d9f617f8aa, 0x6fbe29b0aa284747, 0x39fda97ebaea08f7, 0x07fc92bd852deca0,
        0xe7cf1a56c21285b6, 0xc86216606593b717, 0x8503609e86922afe, 0x8acef5af412d19c4,
        0x900375034862b1fd, 0x435d4c2b5f50633f, 0xcbd2ceabf2c9de81, 0xe1edd3fb4a7df4bb,
        0x373a70f8da4842c4, 0x5e605279699c7aa5, 0xae38106e6fdbe8dc, 0x2c527a79114f2beb,
        0xf7716d1c417bff62, 0xc0f2f1fa87dc4007, 0x4a012c73e3bb110d, 0x8215578bf76f4b3b,
        0x8f5bf388442ca3e3, 0x935ed5de4e25756c, 0xeb8da5c8a00eb3e4, 0x4ec71b11f0dc846b,
        0x2491a08a75a5df9a, 0xf5dad2f9d04cf60b, 0xd530c8f99534dba5, 0xd825f125f6c41f8e,
        0x98715939864c2502, 0x84ffa0143a7ce6be, 0x90c2269a3ffe24aa, 0x8274f825dcd0f994,
        0x97bd7c09d94ce4fe, 0x8d67ff7047688c92, 0xecd0aa5b4ee5122e, 0xba05eb5ea34cb6d0,
        0x738dd6294bcf8edc, 0x9732a49f273007d9, 0x578e2e64698d37cf, 0x6e9832062c06fd15,
        0xeea34e2e84a83d6f, 0x5364069edc6939eb, 0x3593ad2074f13c8b, 0x1acbebd9c6fd2066,
        0xf64e1031fa78d62c, 0xd581049b42e15fe3, 0x1124e9f07a04b710, 0x0270b5ea2066e9a4,
        0xa241a8e3becbba58, 0x18d6ac7047d97843, 0x57a2b16ab4d60d37, 0xeff09a1b2f63dbe7,
        0x56bab3011680742e, 0xb59639626b4854e1, 0x2891ec7e4b4cc50c, 0x318cfbdabefdc5c5,
        0xbc94c0530dd355c2, 0x21d0b6ac78cafb9d, 0xc3800ca832533ba3, 0x24980f6c4d7c7311,
        0x266c12165c0124dc, 0x049c63cb7891ac50, 0x9eb8defa9a2c3a00, 0x3946faec5828733e,
        0x23684cb7cbe4d565, 0x3185f0db98af4f2f, 0xe7da5324621c12cb, 0xf333829715237c8d,
        0xcbff9b08244e11b4, 0xb10a6d99fe3fa381, 0x6778ad88254b75c3, 0xb22808a59783256b,
        0x88e937e81a79283c, 0x36da60a784451c8b, 0x878f06ced36162e8, 0xa783d987c17c2c92,
        0x3208c4853f078bfd, 0x7e37906f3c40a07f, 0x1c6532d763204138, 0xa2ca55d3077762eb,
        0x6efb0748918f9555, 0xf5f1f1538dfb51f7, 0x16d852194fb2fdf3, 0x81a1cec612feeb5f,
        0xca31411c9e615382, 0x07ef8c2f46d0f00b, 0xe978228e7ab0e45c, 0xd0f3b3b4bf7baaa1,
        0x2882f937c09294ad, 0x3154dff5df950997, 0xd26e547bbc751878, 0x429924ea0fbf2fe6,
        0x2b10cbfbaf973396, 0x3406aaa089541c2e, 0x421ea02d1c322c49, 0x4c685fa52e6bf7d8,
        0xe887b02c9e61057a, 0x57f4293328b9b681, 0xbb68654c5e4df46e, 0xffb8b01e55cd1242,
        0xf3a368134ace75f5, 0xe61431c0c6a2e3ef, 0xbb139e2382ecbb69, 0x773450afed63ea25,
        0xeaa09d519cb197e5, 0x44bd15a2034a1052, 0xdc7c5a35c50bce88, 0x88c3b5251d7082ea,
        0x1f046593fa71692b, 0x55dcf9d2916c4e88, 0xd35094de6d2053f2, 0xeade87ff42ae150b,
        0xd0e2487c2eb47817, 0x69d5faaa0694f7eb, 0x3301a33b91f4fdb4, 0x527776b648091edd,
        0xa409b5f63fe438b9, 0x8ac72b8ee772bbd8, 0x0936fed88834df25, 0xbb5fa37d59f8efb8,
        0xa825eff5a3900fa2, 0xd43996bc7042e327, 0xd77152ccf02ce43c, 0x4a5cf975336c8ec6,
        0x7f3184c464ee22e2, 0x2ed329285d46b33d, 0x7c5dc2d6e8d7eab7, 0x96c6531e87d64045,
        0xf64ae9c87514e9a0, 0xf2a958a25b4c14e3, 0x569c8a51ff9b3c84, 0xecfb0e76e84b3f38,
        0xd79ee62dc0ecce3d, 0xa5c3224cab254244, 0x6bc2ac1bf3e660ba, 0x6ea3daaaf53e4b62,
        0x16dd07c09a0127fb, 0x00f5e2e4261612e4, 0xc4f312e0b3d22955, 0x0d498637cf8fcba8,
        0x3587f871ef608639, 0x4ae84ad8fb6926e3, 0x03af879dbb7d0510, 0xe4b2eb7ccc85e41e,
        0x7d3bb9c87aeb1e8d, 0xa64b10ae5bd9ac7f, 0x1aac7f117cad0594, 0x5d336eb73e876bc3,
        0xbe63e34d7798675f, 0xa28e5fb4a659592a, 0x3a31bafd9d551a51, 0x896391c547770705,
        0xe2576b69979ad9f9, 0xaaec9d30d8534a9a, 0x184a3527ea79b19a, 0x53c044befb87161e,
        0x2867518409572b5f, 0x430542b69559d989, 0x40677b1c0ef8fa01, 0xc87d88473d928011,
        0x853e8febc62c27fa, 0xbbc98ef3aaf8a48d, 0x0c3e820b5e243845, 0xeab6ff7d87cd9f24,
        0x37a09e343cf6feb4, 0x88aa1a0610a101da, 0x268d0291cfe8d05f, 0xc2dae10695c8dca3,
        0x7f36a278845e5008, 0x8177eeb162a307fe, 0xa6336115b657d1f9, 0x6a3b3d626d69cea3,
        0xd35a9cb771310c47, 0x87ebfd1327d1a183, 0x0d57d9762575dab0, 0x9a7f9e818eb1bafa,
        0x6db7d4208300837d, 0x7711535c6932e0f0, 0x70dc3d3a8e09b548, 0xf0fa985e19bba5a9,
        0xe3a8e4d08036f7ce, 0xc10d24d2a6b3040a, 0x7e5d7dbf78e00289, 0x347874a04ef5bef8,
        0x60a909a3c1dc2b31, 0x606866377c31c145, 0xb8bc17a66392089a, 0x8e180e328c27d3dc,
        0x3f985fb3cdb5f1a9, 0x49d1bfbf0623595a, 0x48fa5403eb0a77cf, 0x893d378083bc0d0e,
        0x4ff5483c8429d8ba, 0x106150c527d04855, 0x5ab8bb6d4c3b8d54, 0x21f2f5c56b89af17,
        0xe3f207398267c254, 0xd15287e65854b18e, 0x7efc1550209c04a4, 0x7ca4c51bfa7bada4,
        0xac62a16839fca31a, 0xe43182732d04786a, 0x736ed43fe903efee, 0xdebd801d3acd6e4c,
        0xf990ab0ff04e46ed, 0x236b5f07e2ebc73b, 0x1d76faf08cd2b1a4, 0x4b5938d289346ada,
        0xee9bd5e120d51e18, 0xb3c2ba37a2198841, 0xea7f7dbf4b098d9f, 0xe8afdcb5071892ca,
        0x551eb64dd1ea01e1, 0xcb45c6227fa4986a, 0x1de0e9cf403352f5, 0x41fe573666732587,
        0xf44ddc1526dc1ffc, 0x4ac722f5ac43f212, 0x8dab921474f1cdc4, 0xa3bbdf1b0651d153,
        0x0a40cdef39adf777, 0x9b427b08b53bddd8, 0xa1acd239c59407d4, 0x9add0105f9efa96a,
        0x3f9d951a01600ed6, 0x14113b1ae2d549b6, 0x042b18955c46bfa5, 0x175e94c9ab3c09fc,
        0x4c2eaef72cd0c8af, 0x64b94de3b972cc61, 0x7dcfef41625fa854, 0x5323f6bad82229e8,
        0x41fa9b521581c0ab, 0x451ae4e71907ad16, 0x18d14e5d591425ef, 0xdbf73dfa8d065405,
        0x10911b960ea84922, 0x13aee909f5aaa51e, 0x822256fc69171229, 0xcb374aaf0eb5f68e,
        0x788728952d7f59ef, 0xc85c96166ebd1488, 0x35ae7d07079c0c2f, 0xc54f89f366ae3221,
    ],
    [
        0xbc5a62846a436476, 0xe7e66f2fd3d777d7, 0x75474cb6be4f2782, 0x33207f69573ec6f5,
        0xaaa61588957c94fa, 0x18fd7a45764636b5, 0xdfb5727d2923b8cb, 0x1736296d1ea4a056,
        0xfa912a0a5d8bbec9, 0x18ae5e744557b49f, 0x8578a00280ceb559, 0x8e245a192f96144d,
        0x2d872d172a510565, 0xb6247469cb2b061b, 0x954cb91c37365c9b, 0x271b2e2a0133903b,
        0x0d8d112cff860883, 0x117ae3ff072c793f, 0x1e799084f8d1333a, 0x67b66ad862f132b5,
        0x88a0cd6d0deb1d99, 0x95a4d51f71ae6516, 0x95bbe5282d672209, 0x13cffce916fcb889,
        0x7ddc02354d70bb81, 0x8da5cf463babf4f6, 0x34e8087db4b874d6, 0x07b6aeb8fd2e8214,
        0x2800445c4ec7cf05, 0xeb8492be5b7d3647, 0xe49f6558c354a9d6, 0xee6e8134bce59c0f,
        0x2318aa983b0e027f, 0x137c08b039980cee, 0x5c0ad747b2e13320, 0x63acd70e8344224b,
        0xc965b2a2ae9ef2cc, 0x0d43b92c92284adf, 0xe8ca133be5808e53, 0xd256dd83dd77d731,
        0x321e608626e53df3, 0xefec4deb4be5ad18, 0xd4d0177b938e64c9, 0xb05981303c63d73f,
        0xfa149b848c0e197e, 0x4422bc58f18882bb, 0xf32a21e64cb19878, 0xa3283a2c72aa1c89,
        0x76f806f25d43c8a7, 0x7c228caecf41b164, 0x753837d3b75ac898, 0x442bb39a0be95497,
        0x1fc4161ecd7d0dac, 0x38dac75b10b412b7, 0x44b2c3bfb712a1f9, 0x53c4c95657a10070,
        0x6efb5f1bb49138a3, 0x5c4310602573443f, 0xaf2791761cfc6627, 0x47f6144cc6f3bd8d,
        0x31a6aca7f5bd4ac5, 0x1d264af0797f25ff, 0x1a206da393e73961, 0x19915b26c3d8ed98,
        0x6fcc231335dbb9cb, 0x3519dc64cf1a6b09, 0x10ef5e6b41c2c0cd, 0x7ecc4bbe67bd2e8b,
        0x6a2bc707364911fb, 0xe437ee86b75d48f3, 0x6e793e5ce6773d5e, 0x6f74702cd77811ba,
        0x7051140a0087edb3, 0xe33760c63db266b2, 0x3639aadfd8d61946, 0xc740d3483b61e5ab,
        0x3e6820790357ba07, 0xe75c53512f10fe1e, 0xe0eaa047b2f74fe7, 0x5b3686f2e495ee32,
        0xe1dce5c9723c6e29, 0x5243e6ea9fb3091e, 0x30c96c55653bcd0a, 0x70318d2bbeb47184,
        0x989e496279a6b90c, 0x0363349f566e2171, 0xfcc53cfcb6926b8a, 0xed7e6683ac7e709a,
        0xe3b323c35347797a, 0xb37428d981fff8e6, 0x224fc2779d0a3761, 0x813e718e4cbc297a,
        0x8e74a7b0b66c6200, 0x0b4cfd7b1ee31caf, 0xc4ad763ac0cfb2d3, 0x3d068b4cd59f7f86,
        0xdea716a3c2c68dd5, 0x2e31bba00839112b, 0xe7f7f71eda47666d, 0x966efefcc3145159,
        0xd43079fb15afee63, 0x814253674da4c4a7, 0x6105cd0e06a64b56, 0x2faa6a0e7414d0c0,
        0x07eb1d15f42b2508, 0x16625be8d59fa732, 0x8d0199f1f9a0288f, 0x55e59f610431550e,
        0xca31714c60ae7755, 0x1ccb7b470ddd0dd7, 0xeac040979277c80b, 0x1969613e2a4d513e,
        0x08a64cb263b7c746, 0x40bef27fedbefa7c, 0xaee88a6091959a78, 0xce5d2c600f33c9de,
        0x83733f27370c15c9, 0x6df5c9a1c7e06d08, 0xe556b78ac90852af, 0x7d1be72eae6e4872,
        0x11f7a9bee88d2db0, 0x92f9f9ab94258714, 0x94b8cff4483755e9, 0xdf7b1ee471c19265,
        0x83995bded825db6f, 0x2cb7cc17d22e3da1, 0x37d75a901e7db32c, 0xf451e57a9a66a6e5,
        0xa77d2d9f5012ffbf, 0x0df07bebdbf88dcf, 0x592c6b066a65e29c, 0xa07acd348ffe2420,
        0x09771450c4907b19, 0xe323bb1860a80177, 0x8ecc901ba0641165, 0x5c927548432dd74b,
        0x5293672b64865e5b, 0xd5d830c7b1b249b5, 0x3fd52d94add3bb00, 0x8703710e293ddb25,
        0x49edd962ebfaf203, 0xbaf44963d20e1bf7, 0x9af74b8615716541, 0x89bcc9740c991f28,
        0xc19eadae191ad70e, 0xf93ad51431a59e39, 0x9cf130fd44b5195c, 0x46c429eaf50a0e98,
        0xf5d19b9524dd89d5, 0x4d4bb4b0ed1f2fc7, 0x0581419057659f87, 0xb655d0985896e541,
        0x3536cd9d3536deee, 0xcda1ff7748495d23, 0xacc1f2583f7e5159, 0xfac0dfab81fd6931,
        0x081b1177481db950, 0x81cfcde24b46304b, 0x4be2143b1b76b8f3, 0xafa2753c96283457,
        0x3f75c46d9f548eb3, 0x9ec73de2ba614ea3, 0xce322037318a8e8e, 0x406619ecf5e0f955,
        0x02b8794a076cdb05, 0xc8093c56df17641a, 0x89a6466953cf6d7e, 0xa2e0f9283b90f004,
        0x7b5521080ef22bc2, 0xffee542e6808cdf7, 0x9176d55914a226c0, 0x6f2e109d6693eb8c,
        0x934ed1af8ccc4241, 0x828580a8f40ea941, 0x67178d8f13380801, 0x0d4c0347ddd5ea18,
        0xb6cdcdab45256a2a, 0x4efdd6c2ecb43685, 0xf46b0f6ee6f59621, 0x1ce0d08c283dc751,
        0x224976de853758cc, 0x9c6d80680e08c41c, 0x50f6de2e906a13b6, 0xb704009cd427eda4,
        0x0b9a2b113233df5b, 0x1548fe21b1283d2e, 0xa5916f700fda4bcb, 0xa7ea37f13fd5c30f,
        0xcbf20325fe521833, 0x10c4b51ae0016a19, 0xa39f0db10455b815, 0x2984360730dab6a3,
        0xcc25e9f44ae4bd14, 0x17b09654acd4e105, 0x4d424662d12d0608, 0x0a957eb8a13f9cdd,
        0x4cc487739694ccc4, 0xedc3c8f3bc94c0ea, 0x6077ab26d6da5095, 0x9cc73271e7a194ab,
        0x6e8448c9c82c48d5, 0x24c665b9c5fff531, 0x16c27846e09a8ce3, 0xf4bb6ac02bbf8f63,
        0x3a13edfbf81eda20, 0x216cb6ab2d93babf, 0x4da06207f73dc7bd, 0xadd20cce34f93b8a,
        0x4af8194d62ce0e64, 0x8ce9cfb0c93c1891, 0x4cffc53113c77763, 0xd7e32ebae2b3542c,
        0x189e5230b37cf19e, 0xde435aaff10fa10c, 0x4836e93b08d25069, 0x07124356b92a6204,
        0x579b6894001bfd25, 0x98f9208f34f392ad, 0xc82d71ec8966d593, 0xa1fe88213c48ffd7,
        0x526d051cb89f7c02, 0x968df75dc554a5bc, 0xa8caae14d0ad0247, 0x453fe33c1aedcbf0,
        0x7164251396120de9, 0xd0bca8d4d17822c0, 0xf15232aee9f84dd6, 0xedd0efc9ec6de618,
        0xd0ae7321a0d1a953, 0xc418f19db5ccd14d, 0xe281ca2d1bebfea5, 0x019bb3ef8719bfd4,
        0x9eedb82800f3e571, 0x85c19ef3d7a9f29b, 0x13b373eea00aea02, 0x3602ba82470b10fe,
        0x39772769781a024e, 0xf9ec97280db78350, 0xfe5e269434bf8872, 0xbbad9ce443cee5fe,
        0x640f67ea9bebae90, 0x4d0fa367a834a50b, 0x0e92e27110d981c8, 0x106ed58879b3c1a8,
        0x1bbb773047c1ab78, 0x1544e3c5c3600f4f, 0x1744efd5568a1293, 0x3e0aa93f5f39b7d8,
        0x0688afda1824fcc5, 0xf86fe50b5c5be5f9, 0x9c5318d047ba65f3, 0xdc2d890b79fa08cf,
        0x8dcd25a10278f4a0, 0x5956ce8fd82b2a86, 0x841646e0b69ee770, 0x1710267c3d1a1ebb,
        0xd17fcfc41a5e40c6, 0xcbd7acd04e70c783, 0xf5280949b1a714fe, 0x0bc7f95b9ec9c0c5,
        0x9db6216e50c878ac, 0xd8351164ec8cb0cf, 0x00669b0c6b127d9d, 0x0f035eded6328dca,
        0xeece41cba2c437b3, 0x6b304406c57df7c0, 0x75cfd6c6294c7967, 0x86396457de3b5805,
        0x87b5b5e17a75f2d5, 0x7e0b655cf5109e45, 0xdb0d089ee07890a1, 0x5f5a1768680b65b6,
        0xf207bfb0cc81415c, 0xbfcbf9011ed08b0e, 0x082287f89430619f, 0x625c1ce9e096b4b7,
        0x84a607b8b0c5fefa, 0x711258a9b76e3b6e, 0xd1eb20066a5ad81e, 0xa2ae43c8a8f50043,
        0x58ad5301ebe2922e, 0x931f5b375bc88514, 0x5b1f9f407dcd691a, 0xd2715c1885e03c08,
        0x3c8309425c29c905, 0x7ce788068d0e043c, 0xcfe96bd5928b0ae5, 0x781294c8483c0b1a,
        0xf733614cdbee488e, 0x5d9f748250b7805d, 0xc59709c5915a03b7, 0x6fe3e34eb2580ed4,
        0x5a8b52812ac5fff0, 0xaad98608506762ed, 0x98ee67ac324b25d8, 0x3f4f6109e2d515c2,
        0x556abbaf6f0e883c, 0xca4ac1f982dc1ae3, 0xc63b2d796b629fea, 0x3acd0af45ec7f357,
        0x9f07dfb1be24eb34, 0x2823b4fd1612f28a, 0x8278bad4327129d3, 0xe8c050a857313b49,
        0x682eeeb6cf016971, 0x2ec9c445b87f7ec7, 0x610d0f808d578b6d, 0x4b2e29c67f8ee4d7,
        0x94a3b69719c89029, 0xf827a48d9c83e0a1, 0x942ad99e2b5745a1, 0xdea1ab483153a757,
        0xcf1ea2a55ff97f9a, 0xd20dfc8a520c5fc6, 0x9e9c8e54636cd7e3, 0x9813bced2fd40236,
        0xf1e83d975f2293ea, 0xdef0fefca3d4780e, 0xadb0aaaa0939f065, 0xce4ecfd4e11d88c0,
        0x7d716a5fff085322, 0xda66e74796b9d577, 0x52697bcc1199f802, 0xd82147cc6a8578cd,
        0x6e89210c6f3031f1, 0xccdd88292472936d, 0x8140e4e0d63e2e1f, 0x5292aa3928db755e,
        0x148967d221ce1ef4, 0x59706667c3958e89, 0xfb9b7f3759195034, 0x607022db65d29e63,
        0xf04de2b8ddfd9511, 0xdcc712fc6657450d, 0x5bf0968173902f91, 0x0c453ab8aad41c40,
        0x3ab92f3b008495c8, 0x4d13cf2ab53d687d, 0x78bb037db08ce0d9, 0x09221351389fd4dd,
        0xe48450c9d8c7fbd1, 0x9a640eeb2792e0b3, 0x4bee145aaf0d37f8, 0xeb39255c68731891,
        0xe0aa2cae92a88d43, 0xd49971becb375921, 0xd8fafdaeba28f416, 0xb6e4418a977c57f0,
        0xbfbd9e3e44c15ce5, 0x1e896819345ea27c, 0xcf5051f77724f8e4, 0x9e6f51335c2ad1ee,
        0xdf940026aad077f4, 0x16035a80298becf6, 0x2e2000f79a3040b4, 0x9d8875b54139b95e,
        0x73437d67cdda362d, 0xb6f45297ddb2c829, 0x2227631fdca154ec, 0xb50a9907bf88d7a6,
        0x8025770b40473ead, 0xa6c726d1ca5e8f58, 0x36df7c09a7e0cc42, 0xfa7479f4b071c758,
        0xfa8a9c600a3dac06, 0x96dc3e2982b26487, 0xb42a3f9b941c4e5c, 0x3b91c3ccff09bf31,
        0x4d16d56650f59261, 0xc3663ced23170d0f, 0x962bd7bbb4d9b9de, 0x7d61e3bb08bbd660,
        0x031432f037dfc44f, 0xd853922806bcb3c4, 0x0f100bd9ca362913, 0x10a070e79ee60ead,
        0xe8ad7b154998e602, 0x6e721dd953b5e7c5, 0x5c64a26154c49da3, 0xa8a1055f432dde17,
        0x1717876b52317ad3, 0x97e693ab6e92b93a, 0x5608613b0b147d7a, 0x12fc278711ce026a,
        0x9dcbc50bee3077c4, 0x6d0488a1e3e52f8a, 0xc68ba4f8e6a4ff3a, 0x07a2e7c59e61923c,
        0xb711dcbfced0d41e, 0xa8db1b8558059756, 0x1ad5b03c9641b6a2, 0xb5488385a0192a4a,
        0xf14391fa6b05c2a5, 0xbf590ff2790a5483, 0xae687a99aa972a86, 0xad0a0cdccc930fe3,
        0xf29a1569cfc5c5ff, 0xe06c408ed51fc733, 0x14e1710ca897f0fe, 0xd479630fa7fb4269,
        0xe7250e17fdb9534b, 0x25aa82db5d81e4ad, 0x2e69d5123affe8e8, 0x08dc02d2fb0ee85a,
        0x178f9b5646479ad7, 0x7953ead85fab8617, 0xd44362add31ce6cb, 0xe07be0ad3d9c408b,
        0x24567a3b4409e205, 0x9dcd4986b5c01fab, 0xe8622ae643b6d90f, 0xfaa79ea473418cde,
        0x6055c949a29472e6, 0xe040c19c6e287603, 0x9128916fec4af64a, 0x2a77b6ce69383e0b,
        0xeda9c09894a840cb, 0x46571500d7c318e7, 0x41955f778398a5a9, 0x85baf0c18e5be187,
        0x1866b2b91a95ff87, 0xd0e49176d395692a, 0xa242c5a14406e8ba, 0x8e5fbc2d015ac4de,
        0x2fdab9656ece1cc8, 0x0bcc3d5866960edd, 0x4628ba4f40bdbc8e, 0xbf47caa0e13652c9,
        0x08fbbe218e410ce7, 0x1740fdae2497420a, 0x04eefb7d39de36f0, 0xe6e5ab6d610395cb,
        0xdaca66bbf41db99d, 0x189872e4c5b47b29, 0xbe26960d84a0c394, 0x11504dc51e964a3e,
        0xf84593acd88090cb, 0x149862b36268cf12, 0xd9b6ad5191e96cde, 0xd6a6e92de6c916bf,
        0xdb4ae67ea455aad1, 0x8ef7eee58f2a8969, 0x04d7ff61690e932c, 0x70011f477772c727,
        0x0df6216714181928, 0x8fa3f4fa20bcc98f, 0x84ce1a4c470f6875, 0x9801cecd691227de,
        0xebfe953cdb4a6e61, 0x3ec0fd116ff71c1b, 0x25a5380f351849ce, 0x591eb06632e83f25,
        0xe39bfe3e0fbf9751, 0x4eda8cf8d55c184a, 0x44299f889baed7b0, 0x6e7d2fa8dfc6895c,
        0x15ff5fc98fed2f1f, 0xbcaea5a55ce77aaa, 0x04bdefdbebd2394e, 0xd9997ebb1626abf6,
        0xa399553207160ed3, 0x85b11f96ed9c0912, 0x191ec9a13605b1c2, 0x60039d0152c4e929,
        0xba67e9b86c0c1d1c, 0xd12f01f563c3cb41, 0xe9dbb263ba9ec693, 0x98c0ba7d853cd901,
        0x7d6a36c6cbcd2ae5, 0xd4b6d248dd64702a, 0xdc03e581936c1060, 0x0db7904f0b4f5c3a,
        0x3cece61a2258f0cb, 0xcc26ec02c1ab1c94, 0xec13fce79ec71d5b, 0x6ab8c25b171e2a89,
        0xab0010c7a37c4912, 0xa581856f138e8ece, 0xc211ff4bcb437bfb, 0xcb5a83abfa9f0142,
        0x5108bf0b393be3b9, 0x6bd30919d0ee6956, 0xa8e6620e7086b69e, 0x549cefca09553886,
        0x5ff113980420b3e1, 0xc05b4e273b1073d3, 0xced39f0549250026, 0x96992421e78a2117,
        0xba07cf8900ec1adc, 0x8e8445d056f94ea8, 0x7f5b02280de296f2, 0x6fa139bbf5f5eca9,
        0xea55fb96396a9702, 0x3bb39dfa322f1c6f, 0xed2aab7f8d967703, 0xfc36cde0deb31bef,
        0xccdb3da0f8f04d96, 0xf8047387746d6a13, 0x142a0c753b5bd996, 0x31544a52c77a957a,
        0x381b51bc65bcfee8, 0x4829ee566ec4e354, 0x4aa440bc5a2f88e9, 0x02b1e0e6bd7bb216,
        0x823ac09074a27ff3, 0xe894859f62d07bdf, 0x92a357b3c84b0b78, 0x965c130a2e2e802f,
        0x24adfd6e2fe203ce, 0x4fc004f1f9182867, 0x501de5fe7983050e, 0x517a92f376ce6dae,
    ],
    [
        0x821b0fdf648c48e5, 0xa06d20bc9ff262fb, 0xe01bf0c289c8e719, 0x2c88f1ffdeec441e,
        0xd56ae44f98dfb69a, 0x25f5a71dd360d017, 0xe241619fc1805864, 0xb8eb0bf0ae309a0a,
        0x6b71cdf0cca0c48a, 0x5e5de136d3399e1e, 0xda1c5c7a92025945, 0xcfb0a7d03b64dcd7,
        0xd8aed0cd2c01b596, 0xbc805aa5d562b5f1, 0xda0c10473a707a66, 0x4926699827c7e6eb,
        0x1539228e62a0a690, 0x7812dce2fbddf07b, 0x1212a811f7177c4a, 0xe8d14f32265f8b8f,
        0x11d28438d0eb7d4c, 0x3fae61beb90ce3a1, 0x5abfbcc2bccf7f43, 0x255e2d10281d58be,
        0x2c56637229f20b0c, 0xc346821b4bb405b9, 0x7bcdc697a6ddd20b, 0xade16197684529d3,
        0x1211834bba052dd8, 0xed5f3d04b7deb988, 0xf8346dd6df8cd308, 0xc35f6950fe94629d,
        0x0567272ac4cd4887, 0x5d1eaecae85ecfee, 0xfd73833e06492e0a, 0x94a6c868facd904f,
        0x18c7ac6211e98d29, 0xd2f152cbf0b35526, 0x796e1fe3705b8fd7, 0x1f2a2a91341309a1,
        0x50cd0a3ffeba1168, 0x751882d8241b4dd2, 0x0d2d5b2624f06e82, 0x775665d2faa974f7,
        0xca44b65c3806a30a, 0x092d1914923e185c, 0x58fa82e23c47d01a, 0x9275f219f07a196e,
        0x2134b384c9fb343b, 0xdb406469ed329b12, 0xaf3e4894b730fe5c, 0x60ad066576da8411,
        0x8792d0cb10ab7f93, 0x342c41c945451744, 0xea097c35265e5369, 0x046566d1ac762dbe,
        0x02294e3b75f8dd8a, 0xe272300cfc688c09, 0x29655314dfdf488f, 0x3b54530062b6bf7e,
        0xa982948d4cfdb41a, 0xb34d039be0648365, 0x19f6d369fef04aef, 0xf460aed34397ee7c,
        0x689e6d569f45a433, 0xcba032fdd075868b, 0xbce1e20fb2f4cdb0, 0xab52096bd01b2157,
        0xd5f66b0b609d941c, 0x4c0779b529b0ed73, 0x6f1d6166b2de204a, 0xa9f52f58375b8fbc,
        0x00e71b54c1aea033, 0xe38bab00fe2f8b75, 0xb114ba225d3b0775, 0xf4c2f1fc558c9d55,
        0x1a1a2e1130efcda3, 0x7101b9da35dac658, 0x76ddb98f0c692d44, 0x84ffa3726625bc7f,
        0x98ac50b98ae02bda, 0xd4af2f9b0186013a, 0x9e266ec32d379e12, 0xfeaab021b90549c9,
        0x147884e14254a845, 0xf0f5a1e4571c968b, 0xb22067b628c560af, 0x93ec29343614ed6c,
        0xb168ca7a9e24474c, 0x753afa86ddd624d6, 0xcb07e2292d5090f3, 0x97bed90496a2a159,
        0xcdc0208e86822bf1, 0x31c2c9e6bbc8a6b2, 0xe7ca105f4745cd8e, 0x1cbaa9359f860b15,
        0x676d6962fc8e4b0b, 0x9fcddeed534f38f5, 0x4d2937e19507ea57, 0xb1127cc42ec2bf99,
        0x71c578c42c904ea8, 0xc7f75fd413877dfb, 0x6252a7ba02d131b8, 0x8680be67414db96b,
        0x08d2e0fecd833df8, 0x7dae3003fe177abe, 0xad70f2768c85a9a9, 0xe395ccdbc3f54eff,
        0x125c570261a6206e, 0x5ec112373def87c2, 0xdb12a452780762c6, 0xfc58ebeabb8fcd35,
        0xb572f5d6b0e12b7a, 0x6eb95cc9d933eb45, 0x7a3e4a7d28adf897, 0xe3c033d988d4a968,
        0xfa38d031c25a2a86, 0xb00d3c24c81be29f, 0xea7c368f9d5ea687, 0x662ef0f6625ed2e8,
        0x5f6f6057fc4113c5, 0xb412cf39bdf71f2d, 0xb418943dadc57e2b, 0x495d7d275bb6f993,
        0xddd1d3baf2a7b4b3, 0x2cd7fde05c5f61e1, 0x8030b467d1876f8c, 0xf249e4cc36fbc7fe,
        0xa5a9dca82e572855, 0x70376026943fd973, 0x8c38eeafa1053ca5, 0x37eee2756c45cf5c,
        0xca6b6d35b91b5245, 0xc662fedc9825a018, 0x13c3f91250e68d0b, 0xb8e4f9481a4993b7,
        0x247f5baa69f6d107, 0x736126de3a77db29, 0x11cc6888cedb69a0, 0x110c2db2a0fbc656,
        0xf771f93b36b1a5b5, 0x5b7f211dddc28e5a, 0xeccae586b15b7254, 0xedec924705c9cb15,
        0xaf233c85e5cf21b9, 0x1fadcd166fe8d485, 0xc73828482e8bbbf7, 0x7cd36751081ccea6,
        0x6795f20f2a8693fb, 0x6b9dded87780d91b, 0xecf0777104c6a2da, 0x36d6cc156dc71abe,
        0xfadd8f80abe37949, 0x15fe543cc7c014e3, 0x76afc803f089607e, 0xdd3da7651b695d68,
        0x515eebd48c8362a0, 0x8faa80e181a3f184, 0xee059c5831055db8, 0x29b4bcd3f24f8f15,
        0xa712b0208661c0c2, 0x4d34ec808af32f70, 0x3e532c2ecf562953, 0x0ccfceb3a4b72d69,
        0x4626b0ad3c4ef8bd, 0x8603feffe83ca4a2, 0x3db2ab14086c3099, 0x65dd0396c846e288,
        0xdbd608270a4370ed, 0x8f4d5dc4ee6fe1cd, 0x00ede5d50ed413cb, 0xf0a40e4e3fc83a7f,
        0x311842a287003e1e, 0x38019e9618742a51, 0x16d5a733fdbf4683, 0x5d1025f1bad69c11,
        0x7ee5852f392d24fe, 0xe2dabfa46b638bdd, 0x352c0069b160ae0e, 0x767b3c05de120078,
        0x6914db0b08b028e8, 0xd1e64d86022e8d27, 0x7fc3b2138fcae7f1, 0x15499e72650e4764,
        0xb5300e0d6f699f18, 0xe3ab9c44f85b23d4, 0xbaf090f16395a287, 0xf558fc5d3f00290b,
        0xf52a6b33581aaba1, 0x76f514a3bc6b08cc, 0xa014be023cd7878f, 0xc42d9da8aab03dfe,
        0xb0f07eb78adfb547, 0x81c57cbae35c5e02, 0x8c2d85ef7cd633a5, 0xa070d24e0520ecaa,
        0x98e3a4e37b3f98a6, 0xeee8912561d4add0, 0x32eb021dc4a24f5a, 0x50ce578e8f73c292,
        0x4e3ec504050c3704, 0x7b0d1865f2aa121e, 0x4365bea80f83c772, 0x3cad85caef5b6bea,
        0x2ea34e3d14fcd251, 0xea89f24cd3d1cd0a, 0xeadc1b51e7e82423, 0xcfad0b908075b84e,
        0x943348d3d6a9f599, 0xc3c2cd95c968f0b7, 0x3f3f1dc1a973be5f, 0x7a0014411f1e8f7a,
        0x5a10d535ee01bd1a, 0x10f60ce27597e866, 0xa2bf88db8c4ae7dc, 0xaa2ad1eff592ae78,
        0xafa1bea24cd69856, 0x6b3c0c5d43d08964, 0x9f7a88b9637dae27, 0xb8fa37e802fecb9e,
        0x9ea7b9f59b90cf96, 0xa718348851ecc548, 0x90f4053a18b38aa0, 0x0ae5b06ad29c8458,
        0x660e6aff279454a7, 0x476dffc924b3b4e3, 0xe4baa2d481ca80c3, 0x16b786a355172f5b,
        0x121eb676a390be8b, 0x6be89bb3cd680589, 0xeb763df59db0ce72, 0x8a1d871eb0bbea85,
        0x010cf80066f4f58d, 0x93a9cd5bb08f625d, 0x245be28b927064d2, 0xc3b11d224c00087a,
        0xe049a7d04513d726, 0xe05ea79e4808ca10, 0x1d7e85072f798deb, 0xcf3641541605c11b,
        0x73559faec4f285f9, 0x7a5d0098031df114, 0x225cfb67ee52c58a, 0xab7da95a9f31e1e8,
        0x75a98aa0383cab40, 0x404550bebcf67326, 0x641daa3f49c54942, 0x361ccef084edf50e,
        0x52cce358639dc977, 0x5c14085c7b662694, 0x8fdb4fc8d62f5b38, 0xdddbeb3e2cfc2381,
        0xc3258264894ebf68, 0xc957b50d18a3cabf, 0x03c22a583358c943, 0xa3d73ce3435ab9f3,
        0x48ecb166552c8d55, 0x1964e700ba871f1b, 0x756953649b53cdb1, 0x61d15bd1546b9fd3,
        0x0715dfa6f358c56a, 0x1543814d92163d14, 0x3f1452f50e78c588, 0x2437a4a602e503d6,
        0xf2b2be8a7a438e93, 0x5545e45edecf9cde, 0x006fe80bbda8dbe3, 0x7099dd0e4e0b1230,
        0x6895cb31fd893979, 0xbaaa9ef57567c80d, 0xd6779ff27c3cb698, 0x94bed316bc0898d3,
        0xf5a2f2d1db363eaa, 0xdbdd2ef0778bff58, 0x534d04de786e727e, 0x2e87b8a21fdfd622,
        0xe39982c9218c0513, 0xf268ed02f1eb7d1c, 0x172396f2616675e8, 0x39a82740cc9291fb,
        0x5ce6ed8046713b88, 0xc77c8fb0745221aa, 0x1352d8bd3bd20d78, 0x1af4311cbc0f7b99,
        0x8418fe343a0a5a48, 0xe67512d0a3780d0a, 0xbb2e7fc341081a21, 0xa645c31d1b6c2df1,
        0xe12951061cd25bfd, 0xb45cd8698bbcda9f, 0x4699e5c428d22139, 0x51ebe029e093a729,
        0xcb7249f5154e297d, 0x5650549e45e1f141, 0xe7b57bab52b62fa5, 0x623e24088ff931c6,
        0xffa29252144e9656, 0xa4d6ee1af91cc442, 0x06eb28252af70d77, 0xef8d2f06ddb50678,
        0x8022c2d07b123469, 0x1fc8ae26134cbf9b, 0x259aa9b99eab12f7, 0x427bd1172992276c,
        0x269cb9e77711c525, 0xe22d8f3e38dbfaaf, 0x12391b7196b2505f, 0x7ad9b263b93e7cb7,
        0x462e6b6d6da884bf, 0xc7c510f0c8aab829, 0x0696372b404c39a6, 0x2441f6f41f4a2200,
        0x5dbe59b8328fd50b, 0x24b0b3859956d07b, 0x115653c0371c9db1, 0xca40217965c79326,
        0x26c32c2784665ac1, 0x775fc56a2334cd1f, 0x3c77f0832a257094, 0x86dddbc33813a3f3,
        0xfe3fc268ce854171, 0xf03a8c046b265f57, 0x5e999741447eb1a5, 0x3276fb742c96db1c,
        0x3b02ff2136a66c64, 0x79f2376f27370d3c, 0xa267bf19c9971e98, 0x20cdfc50e4c68ea3,
        0x240b632da331e01e, 0x9608ebce2318be70, 0x334adcb6c2d3d266, 0xc769b937098a2fcd,
        0x10b1d2c914f556b4, 0xe0d1f26d9a60c5ee, 0x0e271cb4df6e7da6, 0x02481eec11f92525,
        0xe917e2c57a8ea96b, 0x673692048706da34, 0xfd7a5fbb225497dc, 0xe76138ce8bb4f812,
        0x6c23e5be1d4e6ab5, 0xa49b5a466030bf9b, 0x9abbb19c8bfcfbc2, 0x6812b80f102600d8,
        0xaf8b5fb34b3bb84d, 0x3e144fce152995c9, 0xede1a7805ea79d4c, 0x600bdd462a492a7e,
        0x654d3c32331a2db1, 0x9f868036822db54d, 0x3602525e45b33a71, 0x640b0990d804facc,
        0x7096885c077496a8, 0x3b0079e7df684c2d, 0x69aab9006b1c665a, 0xf57f4a1ec40c4487,
        0x678ad966c2288ba0, 0x7dab03b8a55ffadc, 0x6076d44988b820bd, 0x4933ffdae14c5941,
        0x90b896a29d1e9d61, 0xe05976cd594d172f, 0x472af63052b0592b, 0x6e41f3156cd5f681,
        0x7653393486294393, 0x1405467201b4c1c4, 0xb13e6e4191261397, 0x5545bec56a73cbb3,
        0x4badfc52f00d5606, 0x2306fd54d79d1ce1, 0x8d811bee3758141d, 0x280f6bc3fd626ea3,
        0x2b0f682bd3aa74b1, 0xb61ae647a90c605d, 0x5681571687b4b181, 0xf36fff06db730d58,
        0x81500be639d73c2f, 0xfa8ea96830b2c82d, 0x6f5e1f3996463359, 0x376ce4ac33b1973c,
        0xda0190eb20119b0e, 0x7bfe386467ec91c6, 0x47386957d962a04f, 0x86d5779ab79c32a3,
        0x323af5ebeeee9bc0, 0xc8ebc9120b950259, 0x6d6b2d88dbd88626, 0xc5c1b041b95b29b7,
        0x737b1401cb22cbd3, 0xf80c6963cbe1af7a, 0x77a231a7e801c021, 0xfec5993b3616f348,
        0x61e6655791150675, 0xe6596006fa55b0e5, 0x8c92c0841521de1c, 0x9209f5501e1e7407,
        0x835fdf7e6430bfa8, 0xc88a044cab36cd64, 0xeacf34c345900023, 0x19896e1b0d7e59d7,
        0xc80b56c8bf5c8293, 0x31cf3a66b8e70e35, 0x3c03a7fdb63b6320, 0x9a5e872271e03be4,
        0x20a8c27f0f424e7c, 0xc939c4e7251f8676, 0x52e26c06e85edd21, 0x64f4843c50c511d5,
        0x134e512029d53349, 0x57089907a61b96bc, 0x59a8222bf389e31d, 0x6aa9cb3045dc9d16,
        0x22362ddfafde743c, 0x6c74490ae555beab, 0xff21f2aa2b411945, 0x7a4a7f59122b33e6,
        0xdbc47c923006ab7b, 0xcaf3eeb5765cd483, 0xf6a37330641016ac, 0x8aaf0dd6a8ed5a3d,
        0x3c2ab06657cc9cbc, 0x342edda42dc5d31f, 0xc43e1f611b660123, 0x72688986b2cbff67,
        0x1802257c81f7b4d3, 0xfb4064c66e762b2e, 0x493afd98d881d50e, 0x7c9d7a3da1b97891,
        0x6a6e84e7892e7bc4, 0x32abf91264051972, 0x564706fa32602f2e, 0x86855c2f133f3266,
        0xef66d726b465df15, 0xda3245357acb7cce, 0xc941524d8cd82e11, 0x746c394562713cad,
        0xb3b7995e5cee0a83, 0x582ad9c902db8602, 0xa6e156b3fca24eb8, 0xcc18624d3c01edc7,
        0x409ac4d796ae313d, 0xd443b2aa6d403b58, 0x106aaf1e825e6273, 0xd6e65ae49b30749a,
        0x4a599db7b86745c1, 0x99037daa35ad3a9a, 0x768da40c82da3329, 0x7c3d9aff028a2c3f,
        0x0666a2a341ae1c80, 0xd2b0ee30ad32ca8b, 0x87eaf04521876357, 0xe18008dbbd7d3254,
        0x9dd15f5b6b8e9624, 0xf2d521bceb9e41f7, 0xf363c9b3c2666e80, 0x5d96b4c5c0c420df,
        0x3236413495a99a28, 0x0c8c2f41bc4b6ca0, 0x57873ef978d8f72c, 0x1b47255d1ba7cb47,
        0x1f4bbef524bf4ba5, 0xb8e03d021b125de6, 0xafd017ad03da2ba5, 0xa06adb6cf2bb3129,
        0xcfc1c24fcdbb5c4f, 0x0b9e5cc5d333801f, 0xe77f89855dc76e05, 0x795e60f3153e0a5f,
        0x74ae99983bbb486f, 0xbdfe5036e2b9928f, 0xfca4c4e0a65de52f, 0x28f5795e03445793,
        0x1214f4f0cdcedefa, 0xd19a912c5e05c1ee, 0xed066aa65c09f3d4, 0xaa494815c0b93019,
        0x617a89e86f6ee3ba, 0xe747e666d989d6be, 0xbeaadbd3064ccb11, 0x94bb0b2b7479b828,
        0x498761fa509205f3, 0x0b9e25e663945b62, 0x335f14cb5f3b7c71, 0x617c51f7811f35d6,
        0xe32c1d4580c8fbda, 0xa97451ac9af8105a, 0xc802d40b189eace5, 0xe51504d88cf79450,
        0xd7758e8b595612a5, 0xb2068ad951a0156d, 0x56fa76a81189c989, 0x8b297d75a0a41260,
        0x7daf8b11db2007fe, 0x0edaa9251af62fca, 0x50daef9c9c2283ef, 0xb3d753d167d9e5b2,
        0x83eb59a3aa4a301b, 0xde6fcc1688f61a1e, 0x0feb26a5bb83a251, 0xfa2b45993a4edce8,
        0xe99fca2b3cce609a, 0x732b19ed71cb4397, 0xf278eeaed078a39c, 0x4889078f8a77e5bb,
        0x15205b7b5b16c316, 0x6da53ecbe7fc8d57, 0xba22b7db398cbe1b, 0xdf68ee045f54bf5a,
        0xf9570f5058964b41, 0x17ffe391b7ca5657, 0x1507350d458219cf, 0xc687e71bb1add2bf,
    ],
    [
        0x4612a56209b3fed3, 0xf96c113acccb0a4b, 0x8afccd364ab1ccd2, 0x8d9daa41b6223f04,
        0xaadfa857acf51940, 0x271c58bb8a3b4cf8, 0x3eade5eb7b2243a0, 0x64ca871cb79f82af,
        0x31b74b0a26bd7c0a, 0xfbf783a790979da2, 0x96fc11f03229fb05, 0x58f4eaba5568f242,
        0x0fa328d6fdc9e233, 0xda59342179bf05e3, 0x7eab8a592ee50fbd, 0x034dd314ef7750f0,
        0x1ff217fae4d4a176, 0xc2dc9d131fdb8694, 0xabd4541c3ac2ab9d, 0xa1b36baf530c98b7,
        0xe5b27e786388a194, 0xb6b91efc72c67697, 0xbac2997850a0fa72, 0x1f09b22514fb9624,
        0x2291cdd0b2a3dde2, 0xd9d84438cd43f273, 0x42d5fcf8697097f5, 0xa3cd09f62eb1db21,
        0x6aa74055ed74e633, 0x85a7028020e4c321, 0x0ce52f0fcb199b77, 0x1fee0f771e33b2a3,
        0x1a254e4a09b9ed61, 0x92b0cb3c94958719, 0xcb6ad82b7e12a730, 0x469e18542df84ca2,
        0x5f84382db63a36cc, 0x290e0044140d01c8, 0x509bd1d6f22b4a66, 0xb795ea0078401c3b,
        0x9bc2068c3d04af4f, 0x3e1ac837546fe4a8, 0x968963a87836aea5, 0xcf8c80aff9f0bdf4,
        0x5c3d7612df0574e2, 0x5a2089ac6062e78e, 0x294d6831fe448461, 0x4929e89fe0aff809,
        0x89262252f38dfaa1, 0xfb7052f5a9c7b483, 0x7c8207cb38590ca1, 0x734039d0ba51f002,
        0x00bddcdd7de07978, 0x3928225addd72e36, 0x49ea0d9b8a3e79c4, 0xa1331e951be7ef41,
        0x207a0e467c6204fb, 0xd8f1db26b13afb71, 0x00d927fce58bde6b, 0xbd08d05ba1567aaa,
        0x6f6cb9eba5f6b17a, 0x0aeefee909d9b4aa, 0x1641ce6b00e6b020, 0x5dfc2874d8247f13,
        0xf296c17a3579966a, 0x24c26bba3615f016, 0x673146351c03ab29, 0x803c9c0e841c3fab,
        0x0c789d1e50156581, 0x269fc422717eb539, 0xa59ec93377424d11, 0x31304b022dab52f6,
        0x66e0e8e8d280cb56, 0xf04dd6a0a335c784, 0x598227e44b36c83a, 0x83b0c37b029afc1f,
        0xd5c8afab51ae732f, 0x7730907ace49a5bd, 0xe7f71845be1e7a42, 0x2ceaa70522da84d7,
        0x8b46e6c2af87f4f5, 0xaa5e026c9a90b4d1, 0x025355b24d5d1531, 0x04503d7b5acf023b,
        0x13270523c88ba441, 0xc7a2ceafb2487905, 0x98d5c82eba55c665, 0x2eba4ff8ca4229d7,
        0x3a625d50f77a0aa4, 0xfecc561dbda7be72, 0xc1fe7be61e936db5, 0xbe37048592c3e3e1,
        0xc44e740f7d06ce02, 0x999a0d075ac075f3, 0xdcdc5cb9bcd11438, 0xd4bed81f9f789870,
        0x902bc06630b10207, 0xb78aa37b4ec6575d, 0x3f89047cac9485db, 0x00dd62eb64aac069,
        0x6ba1de8792d5b175, 0x78afa0a462ea488f, 0xfd8ed371b78d264b, 0x86776990a85ab971,
        0xf309dff9a7796ed2, 0x91ed89a51279c7ef, 0x2d4c556cfabbfac1, 0x0728f880d3222dd6,
        0x2eeeeb6f719414ce, 0x152f1804dfa6fb44, 0xc3c6f44642cd2105, 0x19755ec21769a00a,
        0x155c96ceeb9cd8d7, 0x49634258bd6c8a99, 0x4cf52db1fae885c2, 0xc45e2042ce206406,
        0xac79b6573c2e0a27, 0x1e6a63bfcee362c1, 0x4e7abe3fec9f16d1, 0xd1f0c3c39fa1be62,
        0xe30f142062c3e9d7, 0x5c5627eb32a790de, 0x65d85f03f34841f4, 0x84a55e4302acbec6,
        0xc18543209c55857e, 0x30fea11a784ca675, 0x846b97deeac7cad8, 0xc211a7a1e3c11f56,
        0xa124a36f07960971, 0x52fe115aeead2f5b, 0x458f36bfd7ff3a32, 0x60eee3f9c50b42cf,
        0x5e79cef762cff8f4, 0xe82644e95b381fe1, 0x65a8e1aaf5c7c3b7, 0x1825ab54928239a7,
        0x086795e63d1c83d2, 0x6e3c255487d93c4c, 0xdc69ad06d46fca66, 0x93de2d27994d7dfc,
        0x85e5955383c00cee, 0x0dfb8a9709be5c7b, 0x5f46a5116121e573, 0x4561a254fc0d647b,
        0xcf65877589734273, 0x5edffd39208cbfa5, 0x3d85f67cfb726ab8, 0x96bc444921de1503,
        0x9f309fbf4fecfef5, 0x4a4c9e637fb24d99, 0xf3e5b58e2d4b76bc, 0x5b159dd121dc8c19,
        0x3be0fba25fbc5a0a, 0xc4b113c6241b7ec2, 0xcbc5cdcccb6a81d4, 0xeb51fa296aa43da5,
        0x8b40bc5ea33b8d5e, 0x59a62b627bdb478c, 0x587a68ff4777327b, 0x6396feea6ef05b7e,
        0xd2d5ed0162121f53, 0xd035aae14f1bf26a, 0x6f926117fea2d970, 0x7d3ee9ce88d9efff,
        0x25aab130516101b7, 0xc4e3997191eaa932, 0x562b2d3aa419134f, 0xdd81393b185739da,
        0x46e9a59d4e15b6a2, 0x8eb7b88ec73e9dea, 0xa4c389bbd3f9977a, 0x436188a3653afc12,
        0x797c577190349fc4, 0xe8a404b4b61e6faa, 0xa4412eb03a2fdcae, 0x3b6a207bc242f335,
        0xb0082b5ded5ebcc4, 0x1410a747c9f424f8, 0x6cf384c4e8dc711f, 0xc0e75dbb4b3c3d53,
        0x94024ba6df1dd3dd, 0x317b78f4c5eb404c, 0x19bda1c65549ade0, 0xb1d8295e4383e451,
        0x6127b782792f8208, 0x7f41bc1ddf50b6f8, 0x265aec022ac001d8, 0x744ffd215d898af0,
        0x959585c645dacc6e, 0x56b4b509ff1d381a, 0x9b74bfd861aa6886, 0x7512563fa2503b97,
        0x6d03b214380c4a05, 0x85623d260d7aaabb, 0x70e9e789fcf71648, 0xaf4a7a5a77298193,
        0x54cdaba965eb0d49, 0x27fb0822cb62982f, 0x008399fa0c1db536, 0x740413b28e4ad736,
        0x59e678da396ecf25, 0xe3e6b28947994eb3, 0x14cc98e5703ad6be, 0x0d9a6edbb1679532,
        0x9fce31f987505db4, 0x6f50c69223eb936e, 0xa25dacbf38ff7eba, 0x81cf0915bbe01157,
        0x73c4390d52746de9, 0xf095b3fb72a4d6cc, 0x56e26c826d6fc6bc, 0xbb8a122fd2a9c89f,
        0x72cd374b10afee60, 0x7ed373ac4d742089, 0xfae27d9a90615b32, 0x1e1f968fb1aa553e,
        0x67b7598ae794bf46, 0xfc5bc32b40dba9e3, 0xab1e4ecbafef5ffa, 0x2c7fa809d726625e,
        0x42d3539f20f00f14, 0x9aeb710a573c403b, 0x55d9abb71cc6fbb3, 0x9c5d6a012640b62a,
        0x0ba8681130f1b518, 0x1383992dd31d5108, 0x87b0cd9d46a19ecb, 0x9faed6a2bb830ffc,
        0x6f69c3fc5f039793, 0x8a9ef3a2fe2e79dc, 0x80a2c2747a57a51e, 0x76d0031f58136c97,
        0x617aaebac22ef488, 0x96d0720518238af0, 0x2e8b281899b4ccb6, 0x0f8bf1603c7940bb,
        0x0d850f732232eb33, 0x4774d30f08d06ea8, 0x394c37743d5a9181, 0xeca054ef090edab0,
        0x7b6f920317182086, 0xfda0a304e9805723, 0x6fea20ff221dc698, 0x3a70127255b1b97c,
        0xcddeb3570bac41ad, 0xb882736b67c5e6b3, 0xaae756a5e5885734, 0x658d8a849f08bc14,
        0x38f806abb0d3fca9, 0x49d4ef1792d4c803, 0x1b7856662dfe518d, 0x380676226682e78a,
        0xf4e97c94e5f4e930, 0xd1b26fea9fce40da, 0xdd95e765b0fa37ac, 0x124cd9845c007c82,
        0xcb0746e270f1f268, 0x50791fd031a2564f, 0xf3764534a6e904cf, 0xd379c2e1bf809ad6,
        0xdf7a58283321c57e, 0xb0acd51c5b5ec726, 0x80b20e97fb194a74, 0xc5c5d3fa44071d19,
        0xab3c8d74f015a36e, 0x473c06841b74ba16, 0xf0fdd1426b22cd50, 0x3b83427995f085b0,
        0x33ea5eb67069d066, 0xc6160551cb18ff1a, 0xe8aefcc7f58f047c, 0x547a3d4e34b798eb,
        0xb5c84899b01c7a06, 0xbfca4e106645fcc1, 0xb24608bb495e05a0, 0x66df99dfd5d4b133,
        0x16bd0e2e93dfe3af, 0x3f9e6ae19149ac54, 0xb93bc327d49b2500, 0x6ea25976c7674d52,
        0x3673d805531ad772, 0x70853d39d56bca47, 0x3cbbdf76b933c216, 0x90c6786ff0ec0e99,
        0xd9f1f5cd3307ef15, 0x1c099614950bb8fc, 0xf1970b829eeb28a9, 0x170cfec96834bea4,
        0x7916c132abe139c9, 0x53ecc53592bdd6f5, 0x98bb5b0201e45bf6, 0xd073aac1d2d74f58,
        0xd28439ee89e3da4f, 0xdcfae31550705b7e, 0xebba53178c662472, 0x6aceaa56641d39d1,
        0xd91a8f90a15cf0cb, 0x56ebf306e96abf80, 0xc1fd85656cb67df6, 0xdc18c13f424dcd2a,
        0x0a0744f32638c051, 0xd7119b913c359648, 0x58f190245ca87c4b, 0x217e9c8bcd9e1c26,
        0xaefe28aaee92aa6d, 0x1a438bd30879bd30, 0x6af56700a07bb79f, 0xec856e95d6addb6c,
        0x51ec3dd7500c4f4b, 0xb1da56ce1f2f07aa, 0xb3cff8cecc2a1aaf, 0xb0587aef3ba4b85b,
        0x382485422ff46c64, 0x577f909fe8530065, 0x76142488c01e6e47, 0xf3696ff2ffd08522,
        0x966deb5f57d2a492, 0x4835b91148d22911, 0xda0cde52f848a83b, 0x4f6eb682491cd249,
        0xcc9b47ff9341aea4, 0x3659974dcd0d59a4, 0x2d6130b1f4bdd378, 0x903ab4b1f67c0ff2,
        0x8571e6e2a21a51a6, 0xfd01053dea4eff73, 0x2316fb9b43be90dc, 0x83e438f13f0b2da8,
        0x0d19aed3adc03171, 0x4e959eb4abe84e1c, 0x9b821fe2f89c1a5d, 0x46ebac98a299355f,
        0x10e32a39f01c0ce9, 0xfa1d23fd661cc384, 0xc343aaa7b538aace, 0xbb5dd6258b1c7544,
        0xfa5ffe4dedd9ef63, 0x14b872ac92408c6a, 0x840e0978e5afdc5d, 0x1bb4a13bc97d3e52,
        0x7e92096a24bc7e8e, 0x64fd7fef0611efc8, 0x7d9d4bffbbc213cd, 0x98e73adc7b283501,
        0xf9a9b39203e8479f, 0x2b9a902da5306217, 0xdb5808da503607e2, 0xd315af3308135cbf,
        0xa9fe4dfbc8599bcc, 0xc1efafab5dc09741, 0xe1ab4e144ceef00f, 0x68d16728e131feca,
        0xb3a30fe062c4f337, 0xa9925ff608c622ca, 0xfc8146202ed7716d, 0xf69e96b42d44199e,
        0x8cb40a0e5e6b2b61, 0x73324dcad4be3d75, 0xebafedf2a0be71fb, 0x918844c739be7ca8,
        0xc6ce12a4c30fb779, 0x5088ce2452c4b10f, 0x0ac57d2aa72d2be8, 0x038c184220d3cd1f,
        0x739e6278b6e7dbfa, 0x850b02bd09473ff7, 0xba1879db89ad5685, 0x917c2ecd35d4ac57,
        0xbe67090c9aaaa0eb, 0xed09a9d37f6903cb, 0xc7da3b5233ca79c6, 0xb63fe8c6f283aae1,
        0xf00d594fd31c8fbe, 0xab3c4fbeff83b633, 0x812eebfff896ca47, 0xb519c587481cbb27,
        0xc18ffe85926ec166, 0x482cdedee630ff2d, 0x8e8b2044dd5648dc, 0x49dd00602bf02466,
        0x9825683155d2df12, 0x6aaac57a8bbe57e8, 0xd2cc831d355b3528, 0xaf4f70a3a683359d,
        0x1b3662d56d2f59cc, 0x2cffdb747a8b7466, 0xc61c98fb1ca5ce34, 0xc779d7ed90f8e637,
        0x0b9b482bc3726e69, 0x465311dd00b11c80, 0xb2773b230da4d913, 0xfd759448c70a1981,
        0xc83b787f5a263686, 0xdc3bfd517c4a67b7, 0xa3762dca829f9a74, 0x0212e489044427f8,
        0xf170233c0c4f1a2e, 0xfef123077ddec262, 0x3e58cdda3c340b1f, 0x94fee01bc8194168,
        0x28a313c5a1a8b2d4, 0x3d9261e1d0b82d2d, 0x2cc543b5248727e2, 0xdab370f379b318d6,
        0x144fdf82fec7f0bb, 0x1c38da323d779af6, 0xf985fe72d1ee81c4, 0x7cfce0e1d39468c2,
        0x142d264c2e16a126, 0x2bb1836d2017bfd0, 0x5bdaab7c6bc96246, 0xc1b601721504751b,
        0x31cb6703efa80b8d, 0x0de58ca57296a74b, 0x184d3fb6f7462893, 0x4be9c5d600affb4d,
        0x85d0a769aa5693be, 0xcaa3146e916d890c, 0x8d6808cf4f5caa95, 0x6cb3a3b183ed62ca,
        0xdfa55805e3d6650d, 0x900bdd4303a91415, 0x0c5b9c1cb77899c8, 0xa63993f7e18efc54,
        0xf3b80254b9d0a7ff, 0x65293176c979137f, 0xa51ce6b8b8224ead, 0xed7f86a57b12fd42,
        0xa77f286d659fc5f5, 0x4db6f9a0936b7868, 0x43c55c6a803c2589, 0xdc869d5dad33911d,
        0x88c5fbf12f8ef18d, 0x920878f857e53497, 0x3a214691d05eb519, 0x148fb239405788d1,
        0x6b8c6f43373a3e93, 0x9cc32f1c0ceeab99, 0x0951b2bb9b2e1123, 0x2b975db6040d8f06,
        0xfd268866c0c133fa, 0x682c8c6a14f54de8, 0x2c422006b3a340b3, 0xc9e0d1a559c3e65d,
        0xfdd65534aa457eca, 0xc888279219d02037, 0xc7fd2e035e22238f, 0x2f1dfe71cc302b62,
        0xa6c65b2dd4b1a15d, 0xcf6b36e5514787b0, 0xda11f502a4a684f5, 0x968b0cc02cf3d363,
        0x3bc201e31d92b657, 0xe50a86152ed8460c, 0x945d0671ce973d27, 0x13e0c7ee565ebae3,
        0x46b94ad09057ed63, 0xb4e3cb855095bd6e, 0xf65a584af0c320cc, 0xf9e4ce34a2f37d0e,
        0x8a907760bd4cb366, 0xd1aca960b15af580, 0xb0e9867c1fb98ccb, 0xdb4c25fffaeb010b,
        0xadd45f47daf5a33f, 0x13e4ecb60294e75b, 0xe48146da3bc8c021, 0xfa6c823e9f18552e,
        0x5d1d4598e1f765f7, 0x6893691b0a1681f5, 0x6e2a94d1381f9e48, 0x7aad0af908438a62,
        0xc20409ac5a2f6f2c, 0x829ce116cd1c2768, 0x91e5d17c68274629, 0x88674e2d0e28781a,
        0x4172b46d53bb73fe, 0x657116a4f5be2ec4, 0x9942a008c8ea54fd, 0xe34a423c99a6f256,
        0x2d414379e3c7687b, 0x8cd0f12eb9c10220, 0x3b57df03082f799e, 0x472489fdd799acf8,
        0x2651f6c70be59fd2, 0xc3ed02ededfdc74d, 0x82448008c4888cb5, 0xb53691504af0f30a,
        0x32a63bf96e9b6fa1, 0x824642fb228d300a, 0x33f7b468f417d744, 0xa75ab77b7aaf1881,
        0xb18b7cf19654b0eb, 0x84064dd5ae38c3c5, 0xae1fad20a8249c65, 0x22d9d8602e828bd7,
        0xbdc8bef1dd1fd65f, 0x87a12968a7fca0ed, 0xea94c4f193d4f089, 0x42e7148be0181912,
        0x891ba3a5fc2b6be9, 0xf1dead0d1062070e, 0x7f245699def6d6a9, 0x399f64171691d809,
        0xb7f63f5ab93770e6, 0xe6b5a504b4079343, 0xa53921133dd67b22, 0x29537f560a37fc25,
        0x76dbb02103551474, 0x301e0aa63ee49afa, 0x6d5373faab9a6c34, 0x83c474bbe57fbf56,
    ],
    [
        0x43af7ab7916a8016, 0xffa73ca2fabd066a, 0x87629830ab11639e, 0xf48cdca6db4bdb35,
        0xc373ab4bbdb0c561, 0x903374994ad8bba6, 0xa4da416286f8f7da, 0xfb3992a4202bde39,
        0xf6f74fcc4c41eb53, 0x78bb12ea7f3d83ab, 0x0e4ac2b1c0312773, 0xdbadab5d7e952317,
        0x5117890c6f8a532b, 0x25ca1891753008e6, 0xcc5ab6cbba6918a0, 0x310695d0eb10175e,
        0x03536a467d7d98d4, 0x1fa9654715ac27ff, 0x914eec9eed5f8529, 0x8c4b500983c3da54,
        0x0cad6519ca188555, 0xb60b31f32e6d116b, 0x8a6e6766254e49a3, 0xa6b9e6c9f60ee3e5,
        0x1787b8a5142113a6, 0x5e2dddf833ca1226, 0x79085bbd97d34b48, 0xc5a86d3cdebd5116,
        0xd845c68baff5ea89, 0x703cbf6dd7422804, 0x99e24318e4fc3e72, 0x396cfe2d95298003,
        0x3872685d54527ce5, 0x563028667cef9b97, 0x7650e3b195c9a84f, 0x836a2cf30fe014cf,
        0xafed4be649b86680, 0x3c19102326755b3f, 0x487d18bde25f098f, 0xa27a4735e1d88c25,
        0x35072fababefa07d, 0xb105e5ec194f4d6a, 0x5707042875e98a64, 0xbd8a92dec1a7e537,
        0x69709306209cbcc3, 0x134a39c7250a1476, 0xf3eb2d1b5da056f3, 0x9274c0908b9f8e8c,
        0x2e168b0ba6a6a275, 0xdff4574ef1fb3b03, 0xb380cd601aa946c8, 0xd13b436d43a06bf3,
        0xd0fcc076589feca8, 0xe48374cd019d8279, 0x92e10f915810a27d, 0xb100f3382b02578b,
        0x1aedd76172edc384, 0xb54f5cb2b4a1f341, 0xcbd6cb99daa13ab3, 0x94604146606d63de,
        0x952b574796930e8d, 0x66d8404b86493abe, 0xf89d9bf511556d9a, 0x79d0585b36a1f3a8,
        0xf93d487f532bfb9c, 0x494e03a8f9c78bfd, 0x869dd3baa4488d53, 0x6bc23aec74d913a7,
        0x150820226a9066a7, 0xdb71e1fbe3ecb618, 0x88d70b86cbc0b934, 0x2549f5643d6bab98,
        0xd07678a95b944a6c, 0xca22c31c573f9b99, 0x571cfc75e53f068e, 0xab849ed4c2a5bcaa,
        0x2f57781f59430c5b, 0x4338ec985f0ff93a, 0x9f824ec18fb65c7d, 0x79aaa6eacd236aa1,
        0xa17d3a6918413673, 0xcb0dc17bf49b6c9a, 0x7a65ffd3e8edf477, 0x086a7ec54c8a87c8,
        0x323ce5da0cbd0c5c, 0xd49e9d11ecab5aa9, 0xb8d85d4297e70d58, 0xb397af7fa236377f,
        0xa58b6c61180aec95, 0x18e624b9588cb1e3, 0xfa5ba99dc2e9bea9, 0xd547fe08a2ddef2a,
        0xa276eaeb6b75eadb, 0xe5df61f383349bdd, 0x9241c8ab2079c616, 0xcaa66550ad8412fc,
        0x59b343ae91fd99ee, 0x8f662dd6ae3ddb64, 0xbb83ea9378c66087, 0xdde5fc220c08373d,
        0x17b75fa514f70463, 0x75f35df1b6c084de, 0x390180239ab84e10, 0x339905e19bd66b67,
        0x1c2ba05c7b51ba8e, 0x204a548052b77f08, 0x66aabaae946f094b, 0x76695e9a4fc930a3,
        0xbe2a08d0e3360429, 0xec9bb64208994f0c, 0xda14b6313b89c967, 0xa375761024e94ce1,
        0x986a30a30030ef6b, 0x41a1f7651051f9fc, 0x7f7cc73b806b2e19, 0xe43f8567773e4863,
        0x7b2b93c77c603ed8, 0x7d40e6e2309b0fc6, 0x6fb34bad1fdf969f, 0x4716339e64b2c607,
        0xcabcd9769898d672, 0x1439caf0fe32827b, 0x01375bbd2dc1333d, 0xa876d9b0693aadc8,
        0x2a489fd6b0cf7f5f, 0x18c92d3d9b08ff7d, 0xe4e9c5f0ee8cf993, 0xa3d8f17f913ba5f2,
        0xa5f9af3ce2174971, 0xe585a878ff55cfef, 0x10fe1c0bbaf06eb6, 0x8f0ccd9d12ed94d5,
        0x330a60c362d31801, 0x6955e8743cf2a8ad, 0x9df02795acff4f7b, 0x0b56464287712512,
        0xf53bf11db80677ea, 0x4283c1732aed4c39, 0x6c44df8542bfe41e, 0xe3acbb741e72dbb1,
        0xe70968b379e07b84, 0xd2ba8557ddd30a7c, 0x4796d80b56b18754, 0xf78539ff3edfff40,
        0xa6ddcd46295ae303, 0xa3e44853709dd202, 0xf0cb206d70c74bee, 0x9ba0b368aa166c4c,
        0x6b7d2be138560254, 0x3e95f8446787f23d, 0xa859082fb51b3abc, 0xb7a318ac7da4af71,
        0xcc381420947ff26d, 0xf3ba597a21809265, 0x70b9c9fc6c5a6dc2, 0xbabb617f6a149f12,
        0x2d0fc819cc230ec1, 0x0fa3d8cd77d285ad, 0xefa5bf389584a258, 0xf41d021583997dd3,
        0xd621d0273462cc0c, 0x90cb4e8760c1aa98, 0xda08a04cdfcf1365, 0xc4fa2387cb3b2b54,
        0xb12e805190b7c07f, 0x30640e6663e6286b, 0xaa19aa628b7ab4a2, 0xa9bfa0ed62af9942,
        0x3bb1ec56d32d6bf5, 0x13f4e022a328ab98, 0x7d2376e806d37944, 0x1b75f9ebbcb4153b,
        0xd377a9fe92a58752, 0x2a9e0ac0d38704cd, 0x80923b1ccb51f621, 0x8f2b1f2c4f0f3ec1,
        0x79f768f9170ab683, 0x35779aee7f289a4e, 0xc17df7d82db88e6d, 0x35555cd556b814d7,
        0x2dda7a8c6ddfc3b8, 0x226435ee9dec7a42, 0xe5c2b2ff657a067e, 0x92c923ae5b161179,
        0xd370aa7aba814ca2, 0x3c1a356dd36783f5, 0x638a7f20972c4440, 0xf7401ffb667044ff,
        0xbff4b59ba8b3b538, 0x6a60ab6b89754762, 0xe5b2a32317ed9a7e, 0x1eaee5d6225acf11,
        0xd1b9cf1f2d59b4d4, 0x00770b1fd7053784, 0x990348391687ac37, 0xe4aabd1286db09e7,
        0x53d97f09e35bea57, 0x594501f5ed691fee, 0x0fc80219c65ef81b, 0xd52442b47fde7e50,
        0x569a5761bc5900f8, 0xda054c1d39f32bdb, 0xe7d2edb9627e30bb, 0xbf42c3d35d4b7cb7,
        0x05df2305e86d7223, 0xb4b6536109c51794, 0x4c83d37167721520, 0x2369c51702cd6063,
        0x86de0bbd61beae2b, 0xd3905c5fcfe2bbea, 0x03445ff1d1b02e01, 0xa279670fa658ac1c,
        0xb05ed3851696b9b9, 0x2ab8834fa12f4846, 0x2850573be7bb828a, 0xae64b6130a9d39fb,
        0x22520e8f3d8b8c36, 0x902477025d575728, 0x4e0422134e94c5db, 0x14f69a1b8a766128,
        0xdfad96e8edaaf1f2, 0xe990f9e52e88e15e, 0xd7b770b51eebb098, 0x7066e35645534587,
        0xfa42481f8dbfbcf4, 0x33f9fc60986fb3bc, 0xd23daebaca0b84a4, 0x96253732e2aa434a,
        0xe2c8cf2b39a8e99d, 0x3b3720ecd2c6c059, 0xcb9cdebe89f08fbd, 0xd94dd9e02e2cb83c,
        0x326bdfdc5d7bd7dc, 0xa56863c4b7f9a240, 0x9b31682709319f13, 0xf5a34d2df6485404,
        0x37e175ea997bc322, 0x16490507536a4ad0, 0xc3d5fd1f6609791c, 0x02e53bb23938d26f,
        0x7296fd6fff70981e, 0x93bd54c911c96180, 0x7b767ca2072e5416, 0x54af8e53d429ccc8,
        0x678d66e974723d99, 0x818e79cb4243e7d0, 0x173c0900382ba37a, 0xada2e4da0df442a0,
        0x20fa58dbe88eca9c, 0x284e2f15c56a6e47, 0x150665c624dcb1cc, 0xab98d73eb599ecb4,
        0xba0e03ff6aff1cbe, 0xec69fd4c8233dee7, 0xd4db392093e80c9e, 0xd4dfd0a20d32de79,
        0x4a77941844f4eb91, 0xdec4da4a056fe70b, 0x384183777f1ffe7b, 0x0cbff31a1e948326,
        0xf204e0069c5dbb92, 0x7e2baef3d29bd364, 0x32d457dea299ca0f, 0xa6cefd08a3d3e16e,
        0x34e5bba8d3d4de91, 0x2ead717e1da2cbd7, 0x9c2e4fd60dd5cedc, 0xebe967b53d748639,
        0x57af0dc531e32933, 0xfbb51399d1cbc66e, 0xd77c373c63b03348, 0x81e43ae55c8631ff,
        0xdd73dfcc7699458e, 0xb01e57996c35ce9c, 0x664ca356e5dbf791, 0xc49f49bd5d0544da,
        0x8ce4b5a79ae59f92, 0xe70e2ab15b6359cc, 0x47cc95b27bfe8021, 0x66ce6c74902b3411,
        0x192ee945ef2cc6ef, 0x48a5bf7bc1f918db, 0x4a37b41f25ebb95f, 0xb83a147748236f77,
        0x0f25dcbf40868254, 0x40ec61f78561d8a6, 0x28b714a3e1fc18a7, 0x0d5b5c3e5b6de0d7,
        0xda481a9eaf7ae918, 0x76f41ecc974593cd, 0xf89d395d2ca3bd2b, 0x4c4f59791d502ce8,
        0x984744c4d5fdb65b, 0x2c821a0f6ea837be, 0x26a4c9eb2ca57917, 0x279d8fdaab28e268,
        0x33f4f4f6d95bdcb1, 0x2780c9a7ce4cf7bd, 0xbbde59a8a77eb79b, 0xe09ee96526853a8e,
        0xfe355d4d042ff2e4, 0xc7f747d27c8dbfeb, 0x68ad7bef817b1063, 0x90a3da2c701e5ae8,
        0xbab6fedf13a323cd, 0x1485074a37b95c67, 0xbb42d3ed0ad6134b, 0xc346718f82ae0477,
        0x0f7e42156db60b07, 0x3d7376d754658634, 0xdd5113c886d87c1e, 0x4d4b90c547f85474,
        0x1540ada945a7ab8d, 0xc6abad594dcfaddf, 0x4044e12f1ea989c6, 0xe2b2048fda5cbee3,
        0xfa614adcd56b2285, 0x3244924206beadfa, 0xae8578641fda3726, 0x0cec324b6b3ceff3,
        0x6a131facc226edc5, 0xe37395d857bd444f, 0x3334a74c25bd7c57, 0xcf68c47c17a479a2,
        0xfb9a8219f831262a, 0x5cbd91ac6f766759, 0x97081b350896427b, 0x5b194f0ac83b29bd,
        0xc57748048361f73e, 0x747d67cd62390b41, 0xe2d885ef0f7d22d7, 0x1fe93db5c03af7a1,
        0x5473e34a84afc419, 0x28853781e53bca50, 0x91930e5e54f27457, 0x065e8212216a60bd,
        0x827deba5b53f88dd, 0x0063e7ac900ef600, 0xd678d4ae254e69c4, 0x28c2232315cb0b41,
        0xabe5ff334f7e61a3, 0x7a6349e99322a047, 0x7c28fe9e5853f12c, 0xea256a705a199e53,
        0xea52afeee9ca0c7a, 0x17d1efafd6840541, 0x24691010055d79fb, 0xd0d81be135711279,
        0x53bbe31e5babd7f9, 0x7fc498a616650305, 0xf0426bd25b83dd9a, 0x8ead45d0cecd5f26,
        0xfd5fd37c7c909a18, 0xb19501f96e0f01e8, 0x779e2aaf6e53fc93, 0xf046f5a9b6df40c4,
        0xd8b1c012a28942e4, 0x238c4d9384f23bd0, 0xaadfd472da92ce1b, 0xf28ab69b51a97518,
        0x781bfd34453ef338, 0xf98e3f58c497fdf3, 0xb7f35bbbf451fde0, 0x63de85959dbb319a,
        0x4332ef314c4babd3, 0x91e67dd2c0bb24ac, 0x3775b686a1f0b00c, 0x60c2eacaa271dcca,
        0xa86ec0dd186e9813, 0x0b01af950865b2f0, 0x5444339f640df8af, 0x301fb382be02c7a8,
        0x40666848c0bfa2f9, 0xa40cafeb9f8727ac, 0x56a2ca9dcaf77294, 0xa378bf79824e3195,
        0x8dcf9860bdca94fc, 0xe82993f7082bb2b4, 0x204c4eba61012ea3, 0x526e3aa1a2b3da50,
        0x2305edd450d58e62, 0x421caf1ee0df7084, 0xe5cb36a3a3e88485, 0x3acc6decab447870,
        0x472ab89780d4bb33, 0x666250d4685df668, 0xc57cb7ed7008ba67, 0x3cced8e2ca7686f1,
        0x3468ae4142136174, 0xaba54aaab2201a96, 0x92d6c30941bab6b4, 0x6db0edd8906dec8c,
        0xd637d3dd59abdbd5, 0x43739d9c6b9666a6, 0x44b0b5db1329bcfd, 0x2ab14596a944ea06,
        0xa7337a4203d5feb4, 0x5b797232fd5a9aaa, 0x83f97370af40c03f, 0x225cb473e761a5f9,
        0x213c376b42a9a11c, 0x8c70b87efffa5cc0, 0x370c9f0f8617386b, 0x86293dfaa4834d71,
        0xae15a3ccdbfeb302, 0xc01e424c6c1e483a, 0xe5fb055810c0f389, 0x8dcddd89550fb76f,
        0x5970d794e6e30d93, 0x13dfe6fe3e2e754d, 0xdaff93523f572a8f, 0x706f90675eab1c3a,
        0x7f8afc48cf804a8d, 0xa3bf5cb48e5beabf, 0x956d8972291b28ee, 0xe2f24e2cd252ae50,
        0xa5ebb7bf805fb7b7, 0x587d903525760dd5, 0xc0fc7dc834216082, 0xc7d05765ac6b75b5,
        0x295d019946693fb2, 0xbdc40703390ea4f5, 0x32b592d8daa907db, 0xce9bd2ea9691f33e,
        0x4d210cad1ef61a66, 0x635b8bc6f52738fc, 0xb2f7914e64aa79fd, 0xbbbc1b07da079d6d,
        0x634429c22314b1af, 0x2dfc6c8a959eca45, 0xb207c9a56c7f0dc1, 0xc9c08e3931fb2372,
        0xd9f8db04cd56e7d5, 0x43033ffe90ce0b41, 0x7e7c7e7b5bc73112, 0xcd65b3b2d2a70595,
        0x70b46b5c8e116caf, 0xdc1d09f081f556bc, 0x9f956881666a9821, 0x4469339d2478a0d4,
        0xf0187e2caa9df4f4, 0x3cb4697223655955, 0x78b8edaaac2719c1, 0x4d0885e3b4ad2073,
        0xb349fdcee36877e9, 0x6f89693bd7969339, 0xa6b85205f495b9a8, 0xabbf7e6db9c759ac,
        0xb69687a52f6ca1fe, 0x0549569ebe6cc583, 0x384c12d0c1e4e12d, 0x15ed1e994eb62669,
        0x0f8fb5bc0e03218e, 0x2cfea457cfa392ab, 0x5d5e56f373b8d601, 0x7a09095902570c1e,
        0x64a81bf98772b615, 0xb84e2f228c827b12, 0x006e872fba1c96f6, 0xfb05a75976655c09,
        0xd85c86021b1c6bd8, 0x6249afd75b88c4f3, 0x65b5587234eea661, 0x695ef860ab6de6fa,
        0xc854fd7212c73975, 0xebd76d3474230b0c, 0x42af7a0cfdcd985d, 0x283e191dd1e1d63b,
        0x691b1129837fde82, 0x424b202792bd5d1b, 0xb99a639fdaf0a7e7, 0x9443b47703e70f9c,
        0x0a325e4257c786ac, 0xc471e16a707a531f, 0xe63d55b0f327ec2a, 0x8c4823f116a1ffaf,
        0x7f4922ef5f9b9a0d, 0xfaa5200876ae0350, 0x8bb8cbde6eb553ff, 0xf71e5d4f815150bf,
        0xeac65687165200b1, 0xa31c971c9391032e, 0x6cd8bdf642a66691, 0xae1cd887b69f3c34,
        0x5ab3a305a0a3b4fa, 0xcb207d0aae68a2db, 0x9bbebacc7d6f995e, 0xb9e8b2fe74be3d64,
        0x6ae7bb142799bcc7, 0xc5fd89b858937500, 0x4d2944b39f68a486, 0x5956bb3ddfa71b9d,
        0xae6e827591a7d5e5, 0x78bafaf0c54fefe8, 0xb7c30a7da9b91fff, 0xcaa3245eb838908a,
        0x47b20676aa8b1c96, 0xffd6e34c71504d6f, 0xe8f139b4f899dba4, 0xcfcff4995aad01d6,
        0xbd753511fba46d90, 0x32ca736763223573, 0xc4bcafc7a3b18c0f, 0x0972e7880c1e69e2,
        0x9a197dc354a49576, 0x8ab06385992551e3, 0x6772643d2ab50d99, 0x916ce3d2644a1a19,
        0x5f808fc243a6103b, 0xb9a53713fa30a7a9, 0xc1be010838f3b180, 0x0d5c1f47a5196938,
    ],
    [
        0x781a215745e7ea91, 0x1ee8082c1279504c, 0xce817029b0ccbaa5, 0xdc424508eecede3d,
        0x887356cfeedd8e0c, 0x443d9209a6aae58b, 0xe3156f403a9a04a3, 0xbd140bd8e6ad29dc,
        0x22b97078ad17cc54, 0x4c222dae5fa3f92f, 0xea6a77d884535653, 0x2471546ae0bd7ef2,
        0x39aa705cbb9c9667, 0xbdaa2c7bf435624e, 0x720254bb7bf8d03b, 0x3b3892d346410cb1,
        0x63ae69e1ecb9ce1c, 0xe85ca76a5e0970df, 0xa7d627718d69887d, 0x0ea9d35527c2343a,
        0xbc76e168b4c4ed93, 0x2f0da81c8e745028, 0x12bf8b0bfa25193d, 0xcb952e4109c7b43c,
        0xbaf8b74a71f3df52, 0x5f1368751a5b919b, 0x0601e630d440af4d, 0x3a804dd86af5f580,
        0x3a2b7ae8c08f1144, 0x8be2de8065b9cf2c, 0x5f50ef190a19a374, 0x4f942d017375f2de,
        0xcf691cb71ab9986b, 0x6c25e519f0e3e158, 0xfeda750d9ddd1485, 0x6ba93d3a6ac9757c,
        0xc7ce2963062d205c, 0xa28a0d83332f408f, 0x976c2f23c09ad26d, 0xb392d49b6355564c,
        0x0123b543926e26ed, 0xe2410ccb07eca624, 0x73f6e02e06ea04eb, 0x375673066a2c47d1,
        0x1e99d6bd5e3da06c, 0x4b0b2d461f912c5f, 0x816c616f450f7f6d, 0xc01e1f3bdd857b31,
        0x28bca3d2f5ad0686, 0x49eb72bc124e71be, 0xe8507959143ce001, 0xb78a5b742bca0ae1,
        0x5a2ff729f1bd5803, 0xc85f2c69471e745a, 0x0e289c5a2fc1f909, 0x958d7a5cfb9ba6dd,
        0x864f5b4c39930618, 0x0b54f5e6c0e1256b, 0x2feb1706c9fbee1e, 0x16445a64141c8b35,
        0x1a5e9bf2903ca95b, 0xe789ecadbf1edf4c, 0x41386185574ee010, 0x1c6fd7a99107901b,
        0x4da3f86dacadfc40, 0xa466abb22c92ffb7, 0x57ef5bd2279b78a6, 0x11889b35386440d0,
        0x8afab37fe44c012b, 0x3d0798e8274edda3, 0x9b32c4e5297d9aff, 0x7dca4b106a04da28,
        0x223732dcf2c105b2, 0xd5e38e84ed489ca7, 0x8d241deb81d7e667, 0x27d310dc656a62a3,
        0x8c3e584ac51f661d, 0xc113e9711d961058, 0x78b0e6d6d31d7679, 0x72097f2203a5a136,
        0x70d2b43751b28f39, 0x74448d9878988af2, 0xf9d8ac674e138de4, 0xe21c75e44b32e339,
        0x07177b5e85b65a6c, 0x32b5f384cd5668ab, 0x3f0f51b05ba4b3c8, 0x7f7a0ae31c1b8fb6,
        0x300963bca5995b20, 0xed8eb5db670d4b04, 0x4aab0d33963e87dc, 0x724a756bd74ea5ce,
        0x35e65bf912dae8d6, 0x1b110df6cb3b96cf, 0xc5bc41606bdd3392, 0x968a76088aa1523a,
        0x42913d717377ba6b, 0x46ee66d6e8898c80, 0x987876dc51c10504, 0xff09b546ec2c92a0,
        0x1e8f812f9542b831, 0xe6d9406c6a054db1, 0xd47afe8819c68d38, 0x57e2f166887c5a18,
        0xcd430b8062d06da6, 0xeda92913ddf9afb0, 0xb969e8f88b97ea93, 0xf66df9b862feb54a,
        0xbd50e15cbae05a25, 0xddaf929a957515d9, 0x17875d8e3306df19, 0x92c2263ac9513734,
        0xf7992f892d4eef7b, 0x01dba0013a6778ba, 0xad9a9f528b49cc63, 0x35180deccccdc3d3,
        0x53de7261eda23387, 0x1c01e1ea6213d79e, 0xece9d22586c4fc40, 0xa0052032e673275d,
        0xe71e7f1acebb516e, 0xe8987efb97ba9afa, 0xfaa4cd69d7e07918, 0xc11c310173c61779,
        0x2d9aefc6a50cb332, 0xec08681147bc7752, 0x62e6a1d82780c649, 0x5dc4a41ea211d116,
        0xc81d6c7d162cd393, 0x4118b26a3e81c7e2, 0xc92837474df45d89, 0x7b229f9398de0d77,
        0x0795935fe4aa3eb6, 0x5c2d462cc2be3c9a, 0x7e0b401e62a89850, 0xa84feafcade05b33,
        0x25168336e284fae8, 0x3d81aca470ea613d, 0x1af73798faf4ef1b, 0xb8014ecaad35da30,
        0xe5645b1de570769c, 0xb230f1b0a2021a1c, 0x848fb878f130d7b0, 0xdb3a1b8098de068d,
        0xc15696b677f848a2, 0x5227649b81620019, 0xad3fbc089fcb0a09, 0x1438785ea7fc353a,
        0x41e3c27500d21309, 0x82744a5aee538e7e, 0xc1b65deb66181f23, 0xbca8a9cf331dfb05,
        0x695cf7eed6c27636, 0x4cd83d190d0d73bf, 0x2712abdb36d39000, 0x0c2968d00432d854,
        0xfa0af1cfae3892b5, 0x0f647a1218957e21, 0x1bdf5e4bb80ad74c, 0x55dc7da6377e5c4c,
        0x120b46011e47bf08, 0xa0e9d4b1ec4f9b03, 0x4d0253f875ec7922, 0x95d3436cc5960be8,
        0x4f8a7915818c322d, 0x67369b765ddd64e0, 0x0e96c03bd3d8d84f, 0x88b3a014230a278a,
        0xddb182d00dcd6db5, 0x8fc0cfd05bb66033, 0xa9b274720cd48657, 0xf734ee373e07ce56,
        0x47a0d997802d7b40, 0x29e4bf1f0ae46856, 0x7ce8d4a5087e86e0, 0x562652d5589327b8,
        0xab10b9cc3977e15d, 0x8d02baec3be03050, 0x950fd33d8438b0fa, 0x15e4fba5a97e519f,
        0x7f1d84c8f0dc417c, 0x95ea99a12f5081f0, 0xe0a56fbe5d79b4b3, 0x514ffd9d7f978d07,
        0xaeee7fa5ebf1f8ac, 0x4b6ea06441d11c15, 0x28562c58447cba7a, 0xa5aa0d18485300ee,
        0xb5670264b29ce693, 0xeea2eeb8c2fc8798, 0xdec553af60f2516e, 0x597e94e7af1b78a8,
        0x2c38a2a1ad6e60fc, 0x1a76cc50fc60e33a, 0xe86b91a82ec4bfd3, 0x73fced8a300a7447,
        0x9b9efc0cda6dfa57, 0xb5488239439882dc, 0xffbf542ea84ef082, 0x44d031f87630aacf,
        0x41b1bb94b356407b, 0xc7bed301be4e88f6, 0x5e1ae7283e0dae27, 0xbdfdcd827f35cd7a,
        0x81923fdabc97abf4, 0x6b34e1ff521a4816, 0xe8e478ecd3ba625a, 0xfb7438e44b1a3890,
        0x6b6e60f4d8ab4d76, 0x47e2ac62aabc2027, 0xcaabb0b0bfc3bc9a, 0x0b8d64bae9a1dd56,
        0xcc9678e476a48f42, 0x1b019babf3eb2516, 0xfeb037f9c0156b03, 0x4a1db4a1e0db9d7d,
        0x74d4d3a103ac244e, 0xd2a5c62abdf22579, 0x856d7e3bf9147e2a, 0xe3be03f3a4f262fe,
        0xa57062dcac408112, 0xa1e112384f907766, 0xc40ec2f7ed7e68c8, 0xb75fff53282b540e,
        0xfb514e52764b2661, 0xba48d97c126c1f31, 0xbcc15e39c676b336, 0x90b7e8cb69029082,
        0x50073cbafb678809, 0x6d67170702b21c2d, 0xe05b5fd80932b2fe, 0x088e49084c194449,
        0x724c9bce8eb6e010, 0x0ab7d29b0509ffc8, 0xe1a874ec99264937, 0x50c4982d659809fd,
        0x0a25b51b193ef621, 0x158b4c8544e32ab0, 0xa53970ac36251f01, 0xa8edd06596a1c164,
        0x47912ca12db8ef03, 0xe3571b3c6dd6c8ef, 0x2b294c00be0cbdf6, 0xe49dac9df5b8340e,
        0xa65694a75360fa80, 0xdb38bd3ec3367864, 0x2b96fae7d4489041, 0x544bbce9450b76e1,
        0x6efcad4a0ea827c6, 0xfed7017e79b79f0f, 0x727926c4a61a1064, 0x531b6de11cc02bf0,
        0x806d08acab1d7b7e, 0x763183e0e031a96b, 0x5b0915377a04eb11, 0xe72da34d53afcb6a,
        0x575b25d6f753479d, 0x34998bc25736d7ae, 0xe5ab4c6dfe565915, 0xf75e1c79e31c8f88,
        0x0ff0f8aaa8ab0840, 0x6391bb41977d4de4, 0x377cc0e0f990caf5, 0x18af2fa6cdee269c,
        0x299e7d7a89933a11, 0x6fd5a7bf0757d8db, 0x6a67088c2f7450b5, 0xf1e4d51f040ae645,
        0x51d64f640caac97c, 0x159dc24d9b874f4d, 0xb0ce9168100dfefb, 0x8a10d5ea3839d3d9,
        0x33a581a4030bf112, 0xfea15155fbffedf2, 0x84646bc3b1c20604, 0xcacf9b6475347c02,
        0x3a04d197b1c6256f, 0xccbd28fbd79d735f, 0xdd7a0a8ca9dc59ed, 0x988d36a3e5b9c892,
        0xddba3bd6c898e5bb, 0x8c41be16c2d04c2b, 0xadc4a96ac8e5d2f4, 0xe446692ac84c22bb,
        0xef6a9ec324bf1af9, 0x751a0d82c5528977, 0xedd7dd6adecef5b8, 0xfee35c15fd4b6951,
        0x371c0155a140ae04, 0xb9f96818bdbf0928, 0x33d533d8b9370740, 0xbdd1e2b9db6b32e5,
        0xed7b52370cb91b3e, 0xb9ad3368ac42170f, 0x13931043347fbbbd, 0xc6cd309f43d6af69,
        0x985a2f0f50a4a597, 0xc063b004b3d4f10a, 0x34e677a4f794332d, 0xe2fa768f9daf8faa,
        0x24d3d4f4148ee5a3, 0x179353987c48d2d2, 0x2037f12cfc98edaf, 0x2cbf8f9879f8df8d,
        0x1f3e70e6df27884b, 0x6e1ffbac2cc11ffe, 0xb2076b47937b00ce, 0xdbd8ed3ae5978024,
        0x356e451896ed36e6, 0x0e8cafecd8880436, 0x0f66316be23c85e7, 0xeaa25d746b5201b6,
        0x6e0f4ecb74e21dd8, 0x5a6bcf9e5bd04e40, 0x1b32db7f97ac7eff, 0xf8b94155c4efeb2c,
        0xcbdfdf28c9107eac, 0xc7daf0b2f9a6bfaf, 0x1b53e9dd67eb90c5, 0xbc364db774512c24,
        0xc914e08ebdec6025, 0x20b39558bd1ef993, 0xe65747167c58a042, 0x8db20bddbb277e4f,
        0x0f3a4b63c8561605, 0x7fd910401e8245c4, 0x02704343ec88ea9b, 0x1e40571b8697a40b,
        0x19e13d3cff7dd9f6, 0x1472441d7a9181b0, 0x7bccbe06da9cb3c6, 0x672ffadff42a4d9b,
        0x45c17651ff847f4a, 0xeaa0f951beaab169, 0xfe1463abe5098aa8, 0xd9ad034df4bd8126,
        0x9cdb1a6ec5e74a76, 0xa565c4843b4cb501, 0xf1059ac4d1574260, 0xf788c83ecaad57aa,
        0x940920a9b2cc7330, 0x0bb54a6e85f90aa2, 0x20b5c8ea7b57e018, 0x64640e55010ad00e,
        0x27573a89fe3499f7, 0x5aa33bc4bf9ad465, 0xac3e53362e70c206, 0x156b31689647650d,
        0xdda3b4765decd8bc, 0x958d87389a4b1260, 0x3d29a1cb896c95a3, 0x6d1d64f6f04ddfae,
        0x94e65b702e186763, 0x293ce87d7f51cb48, 0xc5c482dbcb8c88ab, 0xf4d2e43bfd47ad85,
        0x22d1fa4160d3fe6b, 0x5e8f5277e5802ffa, 0xe0fa842fb0ccc752, 0x394445e3589a7f7e,
        0x35f2427f900f2a49, 0xed94a955eb8cf642, 0x5e67865e5ee2daea, 0x66088ddc8b9fd7c3,
        0x7012618f022a9df0, 0xe4ab63006f2430bc, 0xc359a382abf72b6f, 0x3d5cf77140847dde,
        0xdd9bb81e0e9d8efa, 0x6d725c75f4e2e6f0, 0x026153a178041498, 0xd181f26aeb105505,
        0x127a52de406bfd36, 0x1d59fd74f9c63d09, 0x2d1a3c78adfef0c2, 0x7528a4ea74d082a5,
        0xc5311600f33a7939, 0xf30901538fd3b4bd, 0xfd968b22452253ce, 0x83632663d015a9c8,
        0xa80862436cdf12ac, 0x1a2a7ffb4b957cf7, 0xc390a23addfda333, 0xc26a8fb9b2811e91,
        0xf81cea34492d5547, 0xd669e2ae5fbf2525, 0xe141deda6301c4bc, 0x8ded0a702b87c02c,
        0x2ca911efd5db9315, 0x1a6d3c713b093dc2, 0x846fd46c63f96a51, 0xf71d44adf0e5f826,
        0x9517bd16f23d7ca7, 0x78b787535a90b66f, 0x520fabab5b808e05, 0x9d8743702d0be1c0,
        0xc7a6eaf98cbfa2c7, 0x4f38733fb56f4916, 0xf780ac38a11ec558, 0x07d108efd4800261,
        0x6c6f6ec47a950053, 0x4c523be5d830cece, 0x5c15c6a2eefff298, 0x90df1ab836ecf2e0,
        0x990e4da82523d52f, 0xacf5552f9a69ecaf, 0x0c3ebc94efaadad5, 0x4c33c7e8c011bffd,
        0x666b44154b0a6c98, 0x36e206465e00d922, 0x1ee7d8386f6f3d0e, 0x4e06bc39b5d3d62a,
        0x9314a36c7bed3775, 0x99087543773658ee, 0xfa84c32570ad41d4, 0x320f1769af7c8714,
        0x5e440f7bd5764306, 0x077a742076f09d38, 0x1ff3f223c7c08a75, 0x8923251ecb005dbe,
        0x3de390632d690f75, 0x1b4468fbd9b4a0a9, 0x7295ee0fc75bf745, 0x0610077a031e7c08,
        0xce6136fe13cbf187, 0xacfb2f14a272ac4d, 0x3fe02b91e6886879, 0xb8265661333683c6,
        0xb3777339f68e648f, 0x71dd72840d8b24d4, 0x06acf1a685130fa6, 0x69b08ee4597c0622,
        0x97a83b6f279e27f6, 0x96c31b45f2b53a58, 0xe958f12de9e53d27, 0x3836481829f57098,
        0xb575a98ede925d04, 0xe57b0b4f7f875dbb, 0x1aece4ad9fbce9cd, 0xa08c8d3166609e27,
        0xdf62f3c3a4d93fc4, 0xa23b5acb82240648, 0x69d1842f5cdd3217, 0xc369b3cecba18b7f,
        0xe7d9c315903d5999, 0xa483c7c8bf2d2e7d, 0xdd4e7c6d480568aa, 0xfdd39d7f290469b1,
        0x6bbb8bb1fb1b6969, 0xbf956ec601cc7626, 0x2f95d5618084513a, 0x166281b54d164c1a,
        0xef70e5bac8ded9f8, 0x423a4e3a7b22fe12, 0x37f5cebfe9855c47, 0x2a47ddf9a434cfe6,
        0x9e5e9e341eb978a4, 0xe3fd5e91abdae620, 0x84222f68702b247b, 0xcc3671c6c6e55471,
        0x6c2ab9f7ba8ab893, 0x4ee689dbdc9d3ac7, 0x92f15c528e474b9f, 0x978d98ba9c5d6c52,
        0xd47dc472b04ebcff, 0x2e2de6bcc321a440, 0x7975ede6f3b0a393, 0x4db604a3f45070ac,
        0x34709b245a59d733, 0xbc51ee85d1f1e30b, 0x146d05b618758eba, 0x5d7cf370a0ad217b,
        0xf4f3e8c5aa4ccfaa, 0x9df21e7c00b70e17, 0x4674ef20ead72426, 0xf99d4fec80eea174,
        0x9e254b0e60aa296e, 0x18148bbef19f74cf, 0x6a577072c398c177, 0x2b5f86a4482ba6fd,
        0x3411dadf7b8a5eeb, 0xc71cb875edea4c81, 0xccfaf564401b00fd, 0xc21368a0662912e7,
        0x12b2e39ef164ec1f, 0x0daf826996c24331, 0xebaae0dcb0aa9d61, 0xd05547cca3519f78,
        0xc893bdee1086c2aa, 0x10f2c91ac4ebbf0b, 0xe113432f0f9776ad, 0xe7dacf81dff2a0a7,
        0xcdfb557fd7544352, 0xd9303af1fc21d7e4, 0x08f45064adfe4344, 0xfff18c4d8a868f2a,
        0x47e259fb24daf922, 0xa0e38dd797f1634b, 0xf49e1124e8f8fad9, 0xd674fe1f3900171a,
        0x35fb44bec0627c4f, 0xe266c93977084bd7, 0xccd0f3346c32d32d, 0x5150d1beda7c6fd9,
        0xd3b627279a18476d, 0x61d9a8b1b16cf033, 0xba7689da26f4007d, 0xe11b3ef6c29e0f9b,
        0x4379820bc079d951, 0xf96921fc58ff7f9c, 0xd6c1e8a859ccbe61, 0x8451539220612535,
    ],
    [
        0x7fe996a01539cf31, 0x91b8579dd39207ad, 0x24cafa669d616a5c, 0x9972560776ac1925,
        0x0463dcaa0f82c6a6, 0x955b78408c7c6d89, 0xb3e5e912349b549c, 0x39b4393579f34a8a,
        0x701acab295bf2003, 0xfe64ed1e4263a566, 0x562fb75bca391b0b, 0xae65a5c739620daa,
        0x725dbedef3dbd34d, 0x2cd2814fd7daf836, 0xe9e4cdfe7a7c18db, 0xd80f45a51d63aa7f,
        0x9ba64bf47948782d, 0xe7e06ab7509a0a50, 0x3439443c3cf53e0c, 0xbd3360d88b884857,
        0x493a7a3dc4abb028, 0xcc02304de1c00144, 0x73f13b48656cf9ab, 0xf7ec89e335607bc4,
        0x8e201ee7da6dbaf6, 0x5fd84efd25282da8, 0xecdadb6f79bd3046, 0x4bf367597cfb37cd,
        0xa2257b58e1a010a0, 0xed8d840f51b07812, 0x08fa89bed99d5cfe, 0x22de997917a86e18,
        0x7234dd2410adb458, 0xbe13611903705145, 0xb3e88445a3afd381, 0x3b47563c175b4039,
        0xb363c60b479074ba, 0x3572faaca5003eaa, 0xb18d51f825af7d81, 0x74c2696b7d8a042a,
        0x83a370cfe9415cf4, 0x13594ae5720a5b3f, 0x828db96ad23d4e09, 0x1016908024108055,
        0x6fdc6cb62e1e68d2, 0x401cfb896842ab16, 0x4426665d92310137, 0x3553633abfb6a2fd,
        0x138ebf0f9e5604ed, 0x21701393fb778d2f, 0xf14b37480e555d98, 0x06b9341388d601e5,
        0x0b8c12fe2ae73af6, 0xc7774c121374972a, 0x18daf05fb08cc6fe, 0x4adec20ab616aa15,
        0x7d053c8c90d66732, 0xa55cee46a7fabcf5, 0xbdf37cb22b1c0447, 0xc9e6ca97483baf0f,
        0x0ed032e770ca9046, 0x35537f86aece96b6, 0x14bfa7657c388413, 0x402da46047920742,
        0x4a3f729a0ded7c6e, 0x6f62c7250b1fe916, 0xc1c7445f4c9d0ea8, 0x086449db3442fc58,
        0x75dfc96d11d7d6d8, 0xbfa78bc842c2555f, 0x801f788e086c4e74, 0x61acf55f30046435,
        0x50e4e10a9dff6efc, 0x735bbee41d5e8f55, 0x13030aac3bb1efd6, 0x8ef6f93f6f7c078f,
        0x01c4412a3621fc75, 0x877b72b70d616922, 0x967d35757b4f69b7, 0x8d5eba75b3b32da2,
        0x5e5b7c7280d9ce1a, 0xbdf63778e4539885, 0xfeae29b01d65a7a3, 0x0419041331b7c579,
        0x0e1a8facb4ab8e35, 0x6269dfb9754734b2, 0xc18df1c9aee7e01d, 0x17ca00ca9946bf52,
        0xc1a93ee4abd0490c, 0xc1fc84c17682db7c, 0x669f559b9617ff6e, 0x94b0c7f0db7af2ed,
        0x43f5451c4688bb89, 0xd414a4a276530691, 0x78b1f26e4db4addf, 0xe2ac2321be029111,
        0x0e4b656788379ef5, 0xe6d1f720f94aadc7, 0xa6cbab0a693ad961, 0x53521dfd116b2025,
        0x2a4d8f4c24cb405d, 0x01e36500abf54df1, 0x8d0bb08f19820fb2, 0xcf4908c354230ded,
        0x9f24d1e162a4ff4d, 0x38c4e04a2e65454c, 0x2de4856d84dcac15, 0xfe0d9cb038961403,
        0x0689b22b13f07350, 0x440fb52d5b2eb304, 0x75b96cd3fee8da95, 0x06533515a0c9ce9a,
        0x0577f4c2f229f097, 0xd46bc61e6441fd75, 0xf795e62a6f775e78, 0x0e996e8776c4483c,
        0x555b0ab36455c8e1, 0xc735596692764b41, 0xfbbd3061f59d49f6, 0x99f77e49ea085548,
        0x83f26571f9b2909f, 0xd16a8b9279c8fbce, 0x7f572382fe71722d, 0x09b063bff9bf5055,
        0xe4b0b1d359cac9e9, 0x83aa1df963f7e1fa, 0x95dd04d97b4437aa, 0xb142d6efb45f94cc,
        0x86f1f2993016f614, 0x0f1599acd89e01bf, 0xf733e08590bee7b6, 0x8dbab9202e311e74,
        0x61f05e7b6c100d92, 0x8c56ae3da69c3165, 0xafb9ea4f0082ae92, 0xf0a23fe63f05fdb1,
        0xe637bcf043b95430, 0x9ac619158294342c, 0x305d9831347f44fe, 0xb06d52bcb0177db8,
        0x17bd68de3c07f048, 0xea73ca1bdb066012, 0x6dd350a1a9a434c1, 0x0ef233dfa4708858,
        0x7b9435dbf51df862, 0xf888320f16ddb433, 0x1e7774f678ad7d78, 0x40dd9229142cc145,
        0x26094ca2017aa5f2, 0x72e7a183f14fbc81, 0x30fb5155560355e7, 0xee46be5b180c8bd8,
        0xfd0007bf4de7c210, 0x8422b56a4bb291e6, 0x242bb14d68928ca9, 0x2f1bebf6ebf8b461,
        0xb87a5ff091b96371, 0x9db9d1381468ef8d, 0x032371773523ead9, 0xbfd3439735cc5a17,
        0x3007df15748dba5d, 0x38ce1872255f5297, 0x64d51359257d56dc, 0xe4f3aa891a9f1cca,
        0x3d3bee13646b7f0a, 0x6622f12fac6f3af7, 0xe9f45919aa344723, 0x98a870d8db32943b,
        0xca33914b0a6ff7cb, 0xc5b55d9855d0d903, 0x313c7f8ba6ac856d, 0xf88e6a48ceb87d29,
        0xba94416b6d62eb1f, 0x3245fd38d22eaa61, 0xaaaac6c3b561c6d8, 0x6decd9e804c71728,
        0x0a44f9759762825f, 0x466671de135b55bc, 0xe9a4e4ac8f46de18, 0xe2ff3a6d00eb0c21,
        0xd2f49f034804b006, 0x31c10ea523143092, 0x5429b11793a78581, 0x9108c205c01b9a33,
        0x350dd6d066cba4b6, 0x26ad700bcbf048bf, 0x085b356625535e86, 0x8c4c6b2afc5a407f,
        0xd12c87b018462dfd, 0xa39ab4aa7ac4aaf2, 0xdf6ca8493c39d7c3, 0xc2d613e876608dd4,
        0xc3d44e1886cb9163, 0x8d9bb86d4d1e5843, 0xa2f3ece3d251d2ba, 0x29dee69b7ea25561,
        0xa118e548e13eabb4, 0x72b20e72e33bb1bc, 0x4e8f27a40d740026, 0x7d6baee10c4fa7ff,
        0xac45cd3e85050cbc, 0x0f522e5ad4904935, 0x9f70c1ad94b2615b, 0x915cdd0868fdf535,
        0x117df57e62e735eb, 0xbe336c7bb0d4159d, 0xb92cdef900c79ba7, 0x74c3f4f752161c61,
        0xe74ab6e8b4dd2421, 0x0f10830418e18998, 0x0c79fb016fee368c, 0xb5faab94dad0b2df,
        0x94fcb8b1021476cb, 0xd92a5b1c2a05caa2, 0xd2c9a0ee9ad059d5, 0xd29d5eb0b2873893,
        0x02eccb8b083ffce0, 0xce379feb66a56078, 0x28e2b0cbc19cafcc, 0x90ebc9c7073e5c18,
        0x445dd02fde3c7b25, 0xfc6b7434292b3870, 0x0147af5c6a281494, 0x7a93461f525e13cf,
        0x1485ef0135103772, 0xbbba4793c3143f58, 0xf9e70fccbbde137a, 0xcc73485ce7cb1d2b,
        0xdfa9194c5571af63, 0xb5d7c17f0a8bb122, 0x558f18ea5f9e0501, 0x181cbe5c52f33e07,
        0x2576f2d8da1d1aaf, 0xfabeb890f72db301, 0x7c9f671cfe7dea98, 0x0365ca2f69618944,
        0x5a2fcbba98996d72, 0x252120e8373f201e, 0x0784a3c53f09e1d9, 0xcbc0df55980b29bd,
        0x113b8639dd085e55, 0xee1d9cbb51c0f145, 0x773bd32ac5ab76ef, 0x86ec3a73f4690674,
        0x408a22bc02e829a0, 0xe89d9f889070137f, 0x795a44651906df65, 0x298fbeb16ef3bcef,
        0x8c71c17a40d0d47d, 0x83b3ce1147bb5f1d, 0xb5b430633f5b9cc2, 0xe29cb48799a6f540,
        0xa25a23eebb8860dd, 0xb8d0ffa68a202375, 0x85cb11230c2ddf38, 0xa2c06cdd5d75d4b5,
        0x96984531558fa36c, 0x348b90d4726e38d1, 0x6e422a4566aeba6c, 0x5a62b6ee19a7cd6c,
        0xcc77e3c8dcdf06b5, 0x686870b4d1aa6416, 0xc4f8285a05f4a6ac, 0x253f62b6e2daf735,
        0xc2ebff6480639e4d, 0x2ee883b57c1e11f4, 0xaaf935f44162ff22, 0x0070d150c5183222,
        0xb1596c6db249c407, 0xb993b07f0f8fcd76, 0x7a762493a6bb0f93, 0xfa9bfe6be6420de4,
        0xb0d704db60954c75, 0x27e7ffd6fa834b14, 0xbec71de1e4faf3ee, 0x3e7d792152df4831,
        0x57f101f94abf3bcd, 0xd593492e15efc2fb, 0xd9f899365e5e0c7c, 0x348ac93997487b3c,
        0xbba82bbb97844c8d, 0x1c3c581ee7f045a0, 0xfb7d895481330593, 0xe431c7933774e905,
        0x44c0c08051a0964c, 0x80b66797c9d7ad96, 0x8db3952a916836b0, 0xd433542c5122d6f1,
        0xe21a9dc929c2382f, 0xda5345fe0984e265, 0xa33872faadd016b1, 0xa6ca61efbf58fe30,
        0x951a61a7ee76521c, 0xd1fc1b99240286b1, 0x56eff07607cc79dc, 0x4d9d117293709d8b,
        0xbb2668bdb4793101, 0xe471f1d52f3deaa2, 0x4d6c14a5febe9e72, 0x1504647e9fb59ec9,
        0x2ca2a2e904b2afed, 0x4d253f5cb2e724c9, 0xac78c064dcac620b, 0x17b1b55931826d15,
        0x4be02fee73acc59e, 0x7a7bce676d9ce27c, 0x4f2dcc685264cae9, 0x673d123ee9f82ca7,
        0xde2a59cff2832c53, 0x7d074406a504d91e, 0x643c37e3d51a7866, 0xdf1a8d2eefd8ba0e,
        0x3bf850534d0be34a, 0x31a48f466b310318, 0x7c7cff51dee66228, 0x18b72239cb9a2758,
        0x6c9a8676507fa3d9, 0xd916df0986514cd8, 0xf7766d86c401529c, 0xa1951bc53c564ff4,
        0x58e8bf05369c89d6, 0xb824a1ca52a8c6b9, 0x35e99b1637c1337f, 0xba38cc4c0d0dd5a0,
        0x902d37d66ac25960, 0xf000040b7db03cdd, 0xefea52970adcd58c, 0xe370ead82948637b,
        0xe5af1fb53056f603, 0x0a2ce30ff0c237f4, 0x2b20f047a68d160e, 0x2b6495cd7817a2ae,
        0xa878f56ad46c55c4, 0x5fdceaba8a593562, 0x6c18cdc28158ad36, 0x96c0c50197dd86d5,
        0xd31c51450b59ae5b, 0x16de9a71c68b9434, 0x1a88f3e5263868e8, 0xcf5bd1ed228bf67d,
        0x1ac2c1252d7f12a8, 0x1ace7dcad8dd458b, 0x5d0a2cbdf0a6c9d7, 0xc18f0cebfeef78ce,
        0xb7ff954c2747a430, 0x8f42985d6b3f89ac, 0x5c3741fd9fbf8665, 0xb8a4bc2fe03265bb,
        0xb0c3190e9afdcefa, 0x81e74eb62a9c1e99, 0x0632b102fd365650, 0x41d2d9de833982c7,
        0xcf7e0c246b6c1c8d, 0xe93989d6d895e0d7, 0xd1d263d27344f234, 0x5d50e15d531a2b6a,
        0x67466ba565eda1f1, 0x519d52cead968ede, 0xf171e880d5fa9783, 0xb800c2922b2b7939,
        0xb576672cca990b4f, 0x3f8d39f5c5ade08d, 0x185ac4e66014be55, 0xb6486b3ba4aadbb7,
        0x5b62c7640bf61008, 0x9428d6be27e5b5e4, 0x49dd5f02119b8d90, 0xc96ed7d71c5cae17,
        0x7829f288ada7a17d, 0xa8c9b1e026d82b1d, 0x453b627ec63a6419, 0x952c2765bf611d0c,
        0x0133243996a54082, 0xc521037970b7aa8c, 0x69b8118d663a17b1, 0xf0ec9492e9756e7b,
        0x91ae4f59e11bd49f, 0x13a7f78100612ef3, 0xe29236aeb676fd6e, 0xa0ae9f108a5ed308,
        0xc6bb96c4218f325f, 0x71f905b311902747, 0xe33416a899a4d031, 0xe60f126bad1d5ecd,
        0x287da114f9ee923f, 0x984d9309b1d2f6f4, 0x52d0fdf76d4f8d03, 0x779279e5166d0ff1,
        0x967d9993347d7116, 0xd25b16a9b0a0fd40, 0x9d5b6ae5c52f8c21, 0xda57c16ad84e6206,
        0x302791d508b17132, 0xf4a7157b8d955086, 0x30d52a9739222d1b, 0x3ce476140b194f0b,
        0x33385670b8aa0cb4, 0x716595fbf691ec19, 0xa0bd83e3c529ecfd, 0x28e6827bcfce233b,
        0xe0ff4660d99ba307, 0x53a12e2c4d360436, 0x975d838190e91a8c, 0xd8669635c4980085,
        0x575259d92e42789c, 0x576b4bc8aef2ae81, 0x3c2c497d58fa9be9, 0xfc648dcaf797cce5,
        0xb05f058418fb5f29, 0x112839e9a6b2ba59, 0xaf49e83ac3b93e86, 0x0bee0825fabb629e,
        0x14cc65ad0044d258, 0x48657d9a9e92f64b, 0x3854a8e9ccb3f2f1, 0xe9f1f29a8ec24d27,
        0xf8a7182030550c0a, 0xb7392b18caab40a3, 0xc2d5121024ba41b2, 0x71cfdb4122611c31,
        0xe41d33b869ebc7ea, 0xcd1e7d0cece28bb4, 0xd5fb41f38be7f1fe, 0xd5a1fb7aa8920f60,
        0xfa165b5fff1d3988, 0xe08486a46baf9d1a, 0x428099885ed64e23, 0xfe8701af22ef3214,
        0x30074e5737f4d486, 0x00d4c5986785ee9c, 0xf1f5ebf257e5caf4, 0x24f5874088cda83e,
        0x086bd73684fb30d4, 0x250bee034c87bd6e, 0xc3aeddd1e441c6d9, 0x26ed9a683676497d,
        0x11dc4ab6bbd38f9f, 0xa67904f8ea799dd8, 0x5e3859893e8a2c53, 0x4fd333897ff5fbc3,
        0xf8a38b41a22c648f, 0xcd840f2aa18db234, 0xf0c0105eab0cdb1a, 0x2a2cb6036e402657,
        0xe141bbb82386b7b2, 0x6388c2ee8c744f32, 0x5c507c3fb874ace4, 0xa634e765702135ad,
        0x2032e984ec271fbc, 0xefa485b7431ec12e, 0xa043420c79c92672, 0x0eef53ccf48b3dae,
        0xd28286509ae33561, 0xeb89e93236815f1f, 0x92622a7ae97af4dd, 0xf19ffe090dd22ad3,
        0x87775ac4ed517904, 0x7ec0462e022dc2db, 0x051223b16551642f, 0x2eec6acf513bfdfb,
        0xc7faa80e800ec887, 0x51a77f618e68e3c0, 0x98363c593962f96d, 0x035cc9a958e74d63,
        0x1a3800fd986bd82b, 0x5ad2c9865e110b02, 0x69c5a65d0f999c60, 0x094b89731c71903d,
        0xa64a4a4b22471eb3, 0x6de6a2db351b397e, 0xe6c6fcf26ac61a2f, 0xe2467e0c442148d7,
        0x35a29cf5ee7c263f, 0x3f0c7269c2a7b29a, 0xd60ecf7d32822548, 0xbd1481dc84557170,
        0x8c500b3e374fdd44, 0xf5c600754c851ddd, 0x5048486c586ad427, 0x4ae251f3f3b99d58,
        0xb30e5c0fb797de2e, 0x4a58696365e754fc, 0x8c9c830ce4ab65cb, 0x0dc1553361e3d46a,
        0x8b6c992dd4f4848f, 0x64ffc69993f0b097, 0x19a34620d6fe9afc, 0x8d0a7725bf7df622,
        0x273d5b18ba8c9e2c, 0x77c6d30ee5140d3b, 0xdc9395a1bd6440fe, 0x4c895bc15f56d985,
        0x4e02be2a31865287, 0x0b7fc5f956208d4b, 0xd8a9fa2d0eb825e2, 0x9e2ee1bc0c69f40f,
        0xb2f120eee5338eca, 0xd6b02f71d3829702, 0x669500b73027b8f3, 0x2c9c00499d29cefc,
        0x0248fd93a24764b5, 0x81e6516be7b02c04, 0xbc18c2ea50f007d2, 0x122a6bfb03ac8371,
        0xcb96620e58abaaea, 0x3be2a7a830611c74, 0x0adc9d6e06b52812, 0x9c7f52cfaf6f4d14,
        0xf86a72d0d4183c77, 0x6282e1f5a5431096, 0x0e3a42b6dad6fcb0, 0xa5a56a6e8df44695,
    ],
    [
        0x234b8c7a9e2207b4, 0xb20f6128446d9f66, 0xfba715fcb35a8c3d, 0x547ba94654b01bbc,
        0x7717c42fba4417ed, 0x5fb5dd4d22e489c6, 0x6679dc5e0b93fbc7, 0x453b61815832cd6c,
        0xa997a6d287d9f927, 0x784cd9096c929e53, 0xd53cbd01505dc701, 0xe43ed412c9489dcb,
        0x9c2b11c2c63aa8ad, 0x96d6c6788597d09c, 0x8c8230b267115575, 0x0c89108255ade88b,
        0x5bdcb490a9c418c4, 0xb26ec8a83257f19d, 0xca8a5a583fb4c7fe, 0xb571518c9bb777fc,
        0xa62e09fcbc33b547, 0x686b771405cef121, 0x27098ff810b27762, 0x3c44dac0d193a526,
        0xf722793c12e206ff, 0x8210be46fc73494b, 0x65a74191453b668e, 0xa568f5d0be4d36ec,
        0x3beaec5217ac1130, 0xc34f38e9a008b446, 0x92d1c80544e57ce4, 0x0366065a848bdc53,
        0x81148037d72507f2, 0x70343a0b9ba20c27, 0x54aa3d8a7d05afbd, 0x3745a41fb028a832,
        0x3099c21b9684d63f, 0x1b17ea07b1dd268f, 0x83fb7e59584ef631, 0x078de9df17dfd0cf,
        0x21825747b2e9c3a1, 0x825c61cf01fb07d0, 0xfc23c2156481cc75, 0xfe454df195366a44,
        0x584e1d5e0b56002c, 0x749207b022e065c8, 0x6b207f9caa9b60a9, 0xc7a755adaa68a13d,
        0xb518dd04c652cb95, 0x99b9d2be3828a5c0, 0x02a21dd5cb27c5e0, 0x99f48286b5412271,
        0x75ce0a563496a532, 0x8d7a35cea1ae3404, 0x283354514d478014, 0x0c85bd64725ef820,
        0xb834df1abb547be6, 0x2bf23c0c40b1b744, 0x684ceee9107d9186, 0x0770355cf94547d9,
        0x89c97c6cb5418e15, 0x54a03e39452d5064, 0x69e6188e6614c1c0, 0x1ae4ee9a1baea574,
        0x1f724f30f7ee9f62, 0xd6e06b14c354b5a1, 0xc2548193ed1beba8, 0x7c56c36d055d4821,
        0xb2d66fc7654c1086, 0x9a06d9c281e167e9, 0xf4457919a560bd27, 0xc002e337985e90ba,
        0x62307f24acd2f107, 0xe436e29456a33da2, 0x413de3466a64c3d1, 0xcec053a5112d084b,
        0x6ac1ae127a51c0cc, 0x38f6336c1e1d8b57, 0x9bfc55b19c9f30c0, 0x0525b5014b212e85,
        0xd0e2c38de500a527, 0xd32dc622e54dd785, 0x2ad58826328ff257, 0xf369c39182415187,
        0x9434475aae063835, 0x5ad6bdf3078f4500, 0x33329ca913264ed3, 0xd0717099e2b2d54f,
        0xb57e1f23155d3d02, 0x508817ee57e10efc, 0x40e9dc38c081b447, 0x1e9e539328e952fe,
        0xcc28c64b5e9d1aa8, 0x5e86163daac355e0, 0x34cdf4a3aacd2100, 0xba2af074078554dd,
        0x3a5841fc5db072d0, 0xef34db86749306a5, 0x133490097f3f2c90, 0xcd6d2468c4106172,
        0x06adb196c7c66691, 0x8340b9d54899352e, 0xf12dd40091af7b6a, 0x938df6dafe44b17c,
        0x3520a82e46c3eb43, 0x69ae93fdf2f0243c, 0x6a654801feca7532, 0xda7626c3755cf8b2,
        0x1460ce24aa0cb90f, 0x6e0232a488c61143, 0xcd7509c152f9979f, 0x56c1336010dd277a,
        0xc818563a57e2b99f, 0xa8855350d24a69e8, 0x01b842c3a6b2f9b3, 0xa53ef798e242a8a3,
        0xa316dfbbbe0d69b7, 0xf15c71d675b832bf, 0xd64b05ff3f392c0a, 0x4ef9152425a152a7,
        0x43056b123e7a9586, 0x524154bb9a5bb913, 0x487084230082c312, 0xb5041edb42967865,
        0xd520b03ca558a854, 0x1e405c2d1e7bb355, 0x00bd1531e07cb7f8, 0x0d922f2803ae5168,
        0xfa908ca2c58e21b6, 0xa72d287d63558aac, 0xb956c6dd2ceb663c, 0x8e93362005575f20,
        0x07fe918e57503cd8, 0x83fc248f6b974c90, 0x2561bfcab1acadc9, 0x4b33afde6414f686,
        0xed7b48a59c80a742, 0x68eeb727ce9e06d2, 0x91f6cde93170a5bf, 0x0fd4fe42664c7cd2,
        0x75acd0d7e1db428f, 0x1f945bef6330ace7, 0x132d0e07ce93fd71, 0x9ede010bb61362fa,
        0x0af29f6bca83fada, 0x0c52e874f8698ab5, 0xd926487513b8d08d, 0x2d7c5dd92720284b,
        0x51edd69fa139b769, 0x56df858c072e70eb, 0xffceaf40887e3f40, 0x65624fb4c4c67d11,
        0xd68be19394fc6ce3, 0x7b6b8da2126f2466, 0x48eb63bf8c3fdf2c, 0x768113f9eaad6b24,
        0x355d68bf3af8c635, 0x61432646d586a2fa, 0xd5b89e4d31e9c649, 0x3c755fba19ff3b4d,
        0xfd631862bd910aa1, 0xd7ad61d24ba85f8d, 0xcd03de0fa94b18aa, 0x56c5a9b01eceac6f,
        0x8464492c3d63b3be, 0x4f15940075242992, 0x4a5ae41ee26f11c7, 0x4a09616bc40bc950,
        0xe309ae9f9646183d, 0xd507c99e0943f7bd, 0x20785ec00fed841f, 0x4446f0ab41397051,
        0x58f0c1448f7ffcb6, 0x27f30808837adda6, 0xe3e8f6dc0834e0ad, 0xbbcf6411def56183,
        0x217cf87db96432a7, 0x2f9196953ceaa821, 0xefbd483ed8bd7a07, 0x41d18606c0371086,
        0x35438d6a353e94fc, 0x6504741998b9d24b, 0x1d9ac89d4fba1661, 0x5237ef0eb019cebf,
        0x7459e0bb4375fc7e, 0xb0e93d76296bdb2e, 0x5300137c6c556897, 0x169a6274e585a93b,
        0xe3c24aca0d76773a, 0x2ab2d5df3bbd3ab0, 0x1b90f5154bb7ee68, 0x07df28fdca691124,
        0x55587744a74296ae, 0x4819be29ae68a8fd, 0x13d4ddbeaacafe85, 0xaec65be93a621cf4,
        0xf93851593cacf74f, 0xb78cab727110dca6, 0x338fbb6d46708164, 0xf9ab29e98511fd45,
        0xecd33ae5a7c81e7e, 0x637890b3fce7e2f0, 0x58ffdfd98489b5fa, 0x48ee06f482a917f7,
        0x9e39122719800684, 0x9d627bbb613f9faf, 0x08e4736e511c5947, 0x52f3d088881eecac,
        0x1f75b1f262273db6, 0xf9a60af579183316, 0x661ae2b2dc5a845a, 0x6feab6344eec41cc,
        0x17bbe224e5166a9d, 0xa0fc5e6f254c0917, 0x854b8284930df9ef, 0x04aa7033bccedad8,
        0xb0f3606c22d4815b, 0x2f3b0ec6177bee35, 0x7845cf665763071a, 0x2bc798fca8fbede9,
        0xcd12e443d3d1adaa, 0xc68c7c8e3d92e0c3, 0x558a6e26232cfc85, 0x5ea9337235a22cbb,
        0x17b22d6823881c60, 0xe4d24ad87e091a33, 0x13123c18855c050d, 0x769c1285e1e6e980,
        0x86024ef40bd38c15, 0xe4392a31e6727e9d, 0xeb86d5dd96d90445, 0x0b507845bc969aac,
        0xa19c31be26dac288, 0x5e6dfb09463ee64a, 0xcb612be925269b21, 0xd178806470eb8b23,
        0x56e39f33be0d802e, 0x0b748853d0c215d5, 0x6e2a4165cd5b1314, 0xebffe360b863a4e1,
        0x7fdc35be8cc2fdcd, 0x89390c9104296439, 0x0220825ed13a781e, 0x5df3379cfcb6d1aa,
        0xf53433c11e0ce775, 0x28625a550dcf73f4, 0x281a0ffb34828cd8, 0x48203f41c9a7724f,
        0x5f5f295a9c85fc6b, 0xb3c71f5bda0b2925, 0x6d4644017e99bc76, 0x06cebf5ed04d6a81,
        0xc4deb5ce67e5110e, 0x0808410edbc9fbd8, 0x8afdf46651abb1f3, 0x5aad2f318dd457c4,
        0x7dbe913002911ae1, 0xb024c324205fbdf2, 0x2f8275b530a29cc3, 0x820b96df46287937,
        0x157d908163063029, 0x73f8f311370ff66a, 0x9f4076218b9cfd27, 0x067f09726fb9a688,
        0xcf05c763efa00a94, 0xc0681a1cc3fde38c, 0xcc0b89d75c584a48, 0xc5de197083cd65f5,
        0x4f89e9c6b1050426, 0xc0e7f21b19176cb7, 0xd54a098efe881630, 0x49957b6ebc6f0ae4,
        0x8454f7519e857e57, 0x38575d53f7f4496a, 0xd2dcaa0649a408d3, 0x2522d5db24ecd0be,
        0x6ecb0a021b4b6c84, 0x1a99de09c15bf9cf, 0xdda913a87d5627be, 0x0c522fac31470c52,
        0xdaf995a9b62d5741, 0x5ceb71e048db1eef, 0x30d9b771787754ca, 0x2c787f9baaa9010d,
        0xa456daca6c2030d8, 0xbfa8c268020c1dd6, 0xb40f3e4acea31a31, 0x0e55fe021eb3e23b,
        0x6fa799cbfcc13359, 0xbd6b49b9fc348493, 0x747c3cdaf598b5f8, 0xbd163a36fa113196,
        0x226022a210565cbf, 0x4df1ef86aef59026, 0x028ae37ea355d0a3, 0x23bae09135f7fb82,
        0x3c37018dc76623de, 0x10a3c32a29afd00b, 0xe9a9c09b414a0fab, 0xbc7737f1977b040a,
        0xb02a6edb529458d0, 0x97bc4008bf076ba7, 0x073a2db3fd60d975, 0x67ff26e5814e8aec,
        0x8c2ef2714effaebf, 0xc12b3852c5cf8a0c, 0x8aa029a0de802c17, 0x53f2f5a100a7a13e,
        0x47ea3e8f22ff3a1d, 0x5aa9dce8c7c99478, 0x07abacdd577ed419, 0x1f61885cc55fc0d4,
        0x3f2d2bb7bb23b709, 0x8e77ae7a0c617939, 0x6b11e1e38808ca2b, 0x0a59450f2ebc1791,
        0x5bb40152cbb04ba4, 0x4180ceea27f23f6f, 0xf59a7327b5f34316, 0xe0d4f443137384ca,
        0xc20754339d3af02e, 0x2fca94e7210927f9, 0x10432e15f51b39ef, 0x35cea883733c67e7,
        0x79c84c08659034cf, 0x8c5049eb3b61d20f, 0xe806c1e6d3123732, 0x7db6e14c7202a1b3,
        0x38844b0dd9ee5aa7, 0x9cb729d976dda134, 0x74f8ceed167f28de, 0x3a1765785569c42f,
        0x099d97ccdaf99eee, 0xf0e09be3bb9db710, 0x8ec67a8598efa501, 0x25fe72631659701d,
        0x3fb816d1b9e79612, 0x33adfd1e3d5cd0de, 0x9ef164f885c21e84, 0x1fca0d9700338736,
        0x1643949097968c70, 0x8aeb587ad008aacb, 0x8eb94d6435e9823b, 0x08eb33ca33b05d54,
        0xa7d199803e8f5df5, 0xd989d9c3dc62b6bc, 0x10b3729f8783a05a, 0x32cbc77a761834ca,
        0x0dfe5bbb62427eff, 0x257887418bbcc223, 0x346c1e0735c5c924, 0x2626ecca765dede4,
        0x55c402192d39fc5a, 0x4f11b543299c325d, 0x0f7ed9b68644df20, 0x206ffc365840c242,
        0x2ae6b298c9899033, 0xe40671ff950cfee6, 0x3c118ef499260127, 0xebc04d379ad29b83,
        0x59b9a0fa64b51087, 0x92179b5fbe8cbada, 0x5404c7a76b4fa0dd, 0xbfb3941857590edb,
        0xa0fbae74a730f9d5, 0xadae0275f157f4d2, 0x5ad92ca42c053b7a, 0x90553561a0804732,
        0x21879369f427c7c2, 0xdcf234ea73afc431, 0xb62fcd6e3a3f0fbf, 0x3565a6eb2bf51e2a,
        0x60ebfba8cd7ccdb6, 0x752d16250bde8d53, 0xa66949f53cfb2c56, 0x2c4dd07abcb3daeb,
        0x0b53bd8c955983ce, 0x2bfea97e1aca9b0a, 0xedd30eeecca6433e, 0x69fd006e765ac18a,
        0x672563b6de1b628a, 0x2b965b35ba1d6beb, 0x43c3c19d64c7bf22, 0xd93d424a6620ea8c,
        0x505b724b0f3955a1, 0x74798be7be658f80, 0xd6c9277c2509b2d0, 0x30366a3a58cf3e05,
        0x02976610a8048cb9, 0xaac47edbc8516e05, 0xaa1eafc47f24a161, 0x0c15b6e973a881ab,
        0x02e0b05d214b293f, 0xaa69eb975c333ece, 0x250fa9f78c878c91, 0xf24508f34f876110,
        0x27a19ad01ffce97f, 0x16b06011c650133c, 0x72975dc72267db00, 0x41e9b7f507b76f45,
        0xbe3040ae6412b5f3, 0x2133f4a17f502017, 0x55efaf85b7819b61, 0x7441610520145279,
        0x75af0456bc8aa671, 0xba2d8c53b900d652, 0x94c527fd2eb9e9bd, 0x940e0693b4565e57,
        0x7bcdb661e4631583, 0x2cc38cb9f78fac92, 0xf8090b3b6ab570d9, 0x449e55f7032c25d8,
        0xae45325df69e2484, 0xbaf8c9a3ef62642c, 0x8ffedd8e3fcede81, 0x187bf09481f445da,
        0xd50bfff69f1f6515, 0x4574a25455036e93, 0x45e010fd08d73585, 0x12de11479c57ef67,
        0x5564856b262ffa14, 0x7b36d1cdde4dd990, 0xb8c7538c76f51bd7, 0x9fa48a5b26a3c5fa,
        0xa32f8357f1954f4e, 0x7bebad0a7d89f9a6, 0xde62dae8cb418588, 0xb094b4a8343a7333,
        0xd98c0ac51bf69928, 0x394e5d7a8bcba88b, 0xceb10220fba97ae8, 0x407396acad5fe672,
        0xd80ebbea5197ba08, 0xdddf5568f4adf01b, 0x80558affe9635f48, 0xa2832b52930c5a71,
        0x47c6b6e233c475d0, 0x7255ecfa93e99ee4, 0x38e69105847ebe65, 0x9855d5e74b7dafc5,
        0x5aee93dffaf68dcc, 0x8e3317c97897c5a8, 0xa9099f60aa072ff0, 0x4711ec9ca54f7e7a,
        0xaec916aa2e8d9e54, 0x14f1f010f66d6546, 0xb275733fcdb00a2b, 0x21d544d35067797a,
        0x480e1a92caeced66, 0x618e07f1ef07c046, 0x4ee0d4c3849b946c, 0x2580d5652da39773,
        0xef82200603e81417, 0x2ceba50d53f0201b, 0xbee3f4a168e6650b, 0xc8c324e0fad10660,
        0x732e776b8a8a510e, 0xe138a68048eed8a6, 0xeb960a79630adfdb, 0xf350374b0a415bc4,
        0x05fad0573c038d77, 0x8629b975f3673d7c, 0x3d6fc706a338290d, 0x5f2ad664bda77d42,
        0x99535136843ca984, 0x46c093933e8676f8, 0x9488bb1cf504c32a, 0xf4492e1e0496e925,
        0xaef056ab3b4411ff, 0x60eb5d0cad0f69b6, 0x18335b1bf57b9f74, 0x7e2fd5537be56370,
        0x013193e35a97dc7e, 0xcd2a009f955ba5f4, 0xc1dfbde1502b3558, 0xe824a5bfca6216dd,
        0xfc2a90ab7245c979, 0x6d2f1ae5a8c496d2, 0x35269ba33b55d143, 0xba0110179df30578,
        0x575090b52e30fa1a, 0x534a623e676b75d9, 0x3b0ff430f8cec4af, 0x5026027303bea885,
        0x9472d0e17e038b55, 0x25df10a63366ff4b, 0x66b90aae5fbadc4d, 0xf67c661cf08f3d8c,
        0x24251df41f6da143, 0x7ba9bbf6d13b3073, 0x2d80afd4c594334e, 0xb15912ceeb91372f,
        0x5c9f888f796f12e9, 0xf995ec1423ef50ad, 0xab82f6a0d265e913, 0x053a068b11ad53af,
        0x1b00db45fc6f4c66, 0x2d04fc761b426097, 0xbdc6851d65dbeb2d, 0x66071ec7ee2abfcb,
        0xd18637e7b7959fd5, 0x1c53bf7122706f48, 0x8fbbba5a44d6236d, 0xd76e6fdf5f3769af,
        0x5575770c509f09dc, 0x850ddefb4cee2716, 0x774662ec5830f69d, 0xd72c8d58819c6af9,
        0xa4e8cb473c60ac70, 0xefdca6a8f85cfb4a, 0x0160df79602915ba, 0xc8a8cc999d8a15bc,
    ],
    [
        0x610f0e26941d80a3, 0x47247921af3840f2, 0xa8a674946bb62286, 0x82051640d8595159,
        0x97672559f34b1c93, 0xb114bd674108c8e2, 0x3d05d455869ae596, 0x1558e0f2aa1ff4af,
        0x8abf0cad887051c0, 0x9895e9084195370a, 0xa9fd0cb5c849afbe, 0x6e283c4728b18e93,
        0x64f3d576f5b44600, 0xd1b48ef8afd8ac9b, 0x5a63e8221af3e5f2, 0xadc4b01264b49667,
        0xdef57433579d6ae4, 0x790a5d6f3e03e895, 0x0e4eaa25563038a5, 0x3e3dfcbcdc05b5cc,
        0x0c8c4330ea464737, 0x7618e95eb902d114, 0x3fad2d9e32452b0e, 0xf78068563958e055,
        0xa0445fa7bc3e2c91, 0x0371021dfc5f8c35, 0xc5ca7d082ccaa425, 0x8a801df1db45bfea,
        0xdee5591bad5d215d, 0x507620cffce42989, 0x0a41fb947f7545bd, 0x745d4f74ea3d4446,
        0x4752a49f30b4b4db, 0xe0516205e5a36bc8, 0x96fba79e92c01197, 0x99503ae285648f04,
        0xa361f2b72442872d, 0xbab680ded8c69e5a, 0xa973d738a77c8b21, 0x332f6ab6dd13b3c9,
        0x0cfa46edd572ead8, 0x20c1a770c4fc3823, 0x54adc101456114c8, 0x7c4f5a6875903df9,
        0xd698506e5b092dde, 0x32f00a5d1dfe8b0e, 0x7fb69bab9f1e8828, 0x9f80fe8c28474530,
        0x0ecb18f768880bf9, 0x2524c8dd5461a1d1, 0xc58f4f59a1f90dd9, 0x769acdbe57ab9282,
        0x1924ac16c5e386e5, 0x0f052d3cfbf4d232, 0xfa32ef9f599785ee, 0x252e6a81c61ae967,
        0x56096a0c22ed7ee6, 0x5dbe883f6dd0d997, 0xabce362ccfb9f6b2, 0x951ea7e2401e0217,
        0xdf16e73dc014f166, 0xdbb9656e4b553a17, 0x720d30d8daa92f34, 0x0dd9bc2afda6a4a9,
        0x30927879ad36514e, 0x348325d2df3fcdfc, 0x8d6ef816e7d87467, 0x30e1c706579a3876,
        0xa256be98e0b43506, 0x85948c6b3deb8e23, 0x92a1540093368325, 0x61f43487390503a4,
        0xd09f571db3c6b540, 0xa75007e5927345e7, 0x041df5bacad5c0aa, 0x5458b92f4b4132ed,
        0xf12125dbef5c8446, 0xd8920af73b5f6b51, 0x05480ad8ff58e3d1, 0xa4bdafa71e05f760,
        0xe055b087d5240bf9, 0x27efd50244fa5a81, 0xfef7e89c8a8f6483, 0xc1956ca8fc3c70ec,
        0x989c09c434fc4b51, 0x0a1a4146084ebf5d, 0xb4e659fef523527d, 0xac35ee405df44aee,
        0xa1ab695575a4aa72, 0x4440aa1e0ed2b06e, 0xc8c69ea6eeee9376, 0x8c7fe1fd7a828cf6,
        0x9cfa11c6afbe5a28, 0xf236e0439abfadb2, 0x6b9dd022cb923ace, 0xa439f17840ad1c7f,
        0xdfbb8b178c3c90e0, 0xd77143323295707b, 0x46a9f2de83b50e70, 0xeee51f99923e87d7,
        0xb21bcd3946e52c97, 0xf8615abbe93daf10, 0x9a981f80c008f2ed, 0x70e052f6e371f873,
        0xb9b4abdb78361300, 0xcdffd09e85140885, 0xe7962b769ca6a9c1, 0x3e9cb0562f5b7193,
        0x076a4c82d1ca8b06, 0x8ea5e8e18dcdbdbc, 0xcadc78bec84149e3, 0x5649a173db7fec00,
        0x53468bedaf230a34, 0x6eee810191b6e707, 0xa5584f85fcf158a4, 0x9c3389712a119cb9,
        0x62373a48d64953c3, 0x6b3c83667a2a7280, 0xe1ed3b286b4c7a65, 0xaf11042c72a2e1e6,
        0x31aaf4035825908b, 0xa32117f241765fb6, 0xe6e108d235f9be91, 0xa4d1d708733f637b,
        0xd5796183f96f2c30, 0x96af21a0d9c87aa1, 0xba58757906f30fbb, 0xdba0178a0106ae0e,
        0xaa2dfd4898f22601, 0xef578508c43961bd, 0x3529f938f673b6d5, 0x091154c60298a67c,
        0x7fcdd412e1a98eb3, 0x6a9e05d9d0e9434c, 0xbd64ae0a62eb7ffa, 0x661647323c4f76f1,
        0x3fb2e16be30ab25d, 0x00b4c212d3850711, 0x9a54af37ddff259e, 0x7026345eba674332,
        0x1467539b487a0116, 0x9629e789983339c8, 0x2d241643d6b3626b, 0x171b28b3f185d27a,
        0xe4dbbe6090a5e069, 0xd9d35230e5998b32, 0x50433633ace61af8, 0x7dbbd169e63f02df,
        0x1852120de2cf3376, 0xdfb909e9e3f87683, 0xf0dcd7016c0ff353, 0x2b47891397c18b8d,
        0xf0cd61c6bbe0a1c7, 0x70c8ede99ba7247d, 0xb22cfe59493a2051, 0x1c1868b58d173cfd,
        0x73d0f1e21823c28f, 0x381c50c3ab36ab58, 0x582c7ff53bea2541, 0xc95d951051374e92,
        0x60c8915b70f0b16a, 0x61db680451c3513f, 0x7efcbbb2fe287169, 0x90908fcab6560ceb,
        0x1405f89c85574630, 0x7455ea1dcef6fae6, 0xecc7bbcbaf27cdb3, 0x05740742125712ab,
        0x5fe63ef18c102020, 0x27ce78ab6b3592e9, 0x3f0e77fb909410a4, 0x745e9452591a4524,
        0x4516033b2ef2bc6f, 0x38df57cb6b30ea52, 0xe9424ecc1fe86af8, 0xdeed5bf4d9cb05ca,
        0xe3ba97b9370cd6ef, 0x209fece6ca2fe87e, 0xbde86fb0ab072a7a, 0x049e366f125e5b4c,
        0x5b1f7d6447f4e4a4, 0xaa6579db48079b9f, 0xcee1af272da1dcdd, 0xb353902a1a211ef8,
        0xfd5f6ba7bfa02db6, 0x59ca4da37d87fc5e, 0xb23312907187fa9d, 0xc75170f44f4cd676,
        0xd13ee9f73f70dd7c, 0x2de13a037bd9a625, 0x24f746764c96ad59, 0x3820c9f54969a4bb,
        0xbc5b31b788c8b0f6, 0x7d5e8ccd1bd98c29, 0xf5c0ee768bbf101b, 0x76d9a9c951132d27,
        0x7fcfcd84295a061b, 0x395060b7b9c4fd70, 0x3f263a7ad34b2c59, 0x50d0706e9e13432e,
        0x12e057a7539e8bc4, 0x76e4060ddfee8b34, 0xa3f156bf9b550a8e, 0xc8e381515c9fc32d,
        0x3aa0fa49f380229a, 0xbfd2d787fa9248d3, 0x33b15660c1eda15f, 0x987e516333425747,
        0x2161d5feddb3dc15, 0xb36a0c07f22ade19, 0x8a1589e02e1a3515, 0x95206689240b87c8,
        0x5a1cb8a825c04de3, 0xa0b7eee14107410c, 0x28f06e2ad67b6f98, 0x5396824efa2586cd,
        0x923c3b690123bc52, 0x0d2b6ed384f23fde, 0xcb50e618dc7b90fb, 0xe18f0a360dbde1c8,
        0x75d49925afab1f67, 0xed4cb73eae22c6a3, 0x992f23795ecdbe2d, 0x75870e9f90229008,
        0x5e39500040528319, 0xf2ee6e20ab552df8, 0xe30d60cb4528d67d, 0xafad592680e0f6b3,
        0x0da7bfbd8e0a96ab, 0xac0a30ea868455fd, 0x514db964b5cb693a, 0x4239152db3512100,
        0x1805c84e785a4b54, 0xb8e8c15e8ba82008, 0xe18151cd9e2e44f9, 0xc406ad441a056e15,
        0x0574c792d78fa65f, 0xd325aa1ce94c30ca, 0x13160cc8bc504ea8, 0x14b1a3a9d7077c41,
        0xf5cdabf43516d77e, 0x50b357279ac56706, 0x7c69e25a268bae62, 0x3aec68e0f0c8fde4,
        0xc043b5b5ffa115fd, 0xc5beb93da4d9edcf, 0x4e480c116861e2c2, 0x644d16e0c99a25fc,
        0x85f4f9a9ff798900, 0xc91002cdb95ec918, 0xdcd1f4fdfc7ddce6, 0x568279ba832f0b4d,
        0x3f9aa0dddac738c5, 0x29f8c49bfeb1fec2, 0xf40493f70d33bd5f, 0x5031e9fd99fbc715,
        0xb1281f376c841cc8, 0x59cdba10f8a30164, 0x3768ed6149fdc949, 0xe41de8b75c661a4d,
        0xddbac22bcc2386cf, 0xa0ccfd1618893751, 0xe95eece3a22244e1, 0x5f1a87caf5eba0fb,
        0x6efe71ce733c2597, 0x15801862184c1d07, 0x4df2d33d7e3298d4, 0xd6aaf8e158e7b4fe,
        0xcc6586f1d79f36dc, 0xb50ca3029a078882, 0x3e74f8558528e5d6, 0x7c42ac4ec3864a65,
        0x7d303012da297b71, 0x46ec8691f979a2fe, 0x99f21e295fdcb1ac, 0x7bacda5e1aa6d48a,
        0x50486f9875fe7596, 0xa45a551cf02b0e12, 0x2d0c36ce82a789b4, 0x22b37b251b23f8c4,
        0x818ad28cafd7c4bc, 0xd0119d955ff4478c, 0x0f6fdf2be05a8705, 0x3b29ed649ac345b6,
        0x61c81e2c7c521448, 0xa68a28272158dc4c, 0x821f1670fe17bdca, 0x3fec98c2c54e7e81,
        0x8a1624c7a641f2e3, 0x5ddcfa99353c17f0, 0x88fed0cc6cb04d3a, 0xa50f31f3aea32cf9,
        0x48af06c24220f57b, 0xae967b17e47d628a, 0x24125414e75c93d1, 0x98355eaa80b22915,
        0x147cf487805cb642, 0x5fe8f3f0fef74187, 0x5e510a0a2cf6e29e, 0x2e93edf2a69e11ef,
        0xa3b1c3d8735bb362, 0x7aa04a9ddce4d256, 0xcb3800784c96a680, 0x4c2ed239096883ec,
        0x08d78a5611462032, 0x651a6701ec373bb2, 0xee3478f344fc7b3e, 0x9d95b6e5324cefda,
        0xb2a2656e87fb16b0, 0x8ad588250f1599a3, 0x35b5ec429c8ad8c3, 0x637fd6065b67e48a,
        0xa0997d564a0cd878, 0xd53bc1236548248f, 0x3a1299919086eb29, 0xda4c01f725c17ab7,
        0xa200c7e4ad021e28, 0x84e2df471a4ce44a, 0x9068c3e9126a7267, 0x642a030ac193d942,
        0xdae167195a412b84, 0x0757408f7cb8c653, 0x53b6999ecf405ee0, 0xf24b5e962a6dcbaf,
        0x7741adb7928c2556, 0xa941ff60bbf65477, 0x39ccef58706fc500, 0x28a95c0f80bda2c5,
        0x72fa0df5e71058ac, 0x234e39c0302f5711, 0x0957a0a065ff0e1a, 0x3e77a5c94267253a,
        0xebcf653d1b9a0b42, 0x1c34f848f5cb0529, 0xafb6dc9af63188f4, 0x2dae1bb8bf449c12,
        0x04481034d468046c, 0xa67ba933ced8cb94, 0x8fd2d411c9a466da, 0x51dcf19f39280f78,
        0x8cd78d2e223030b1, 0xceabbfd29efccb9f, 0x20e577da49c0d54e, 0xf9ced36ecdecdefa,
        0x7c22922428b15b05, 0x66152d27f79c69d5, 0x081f3fe74814df31, 0xd56d59569dcd07a5,
        0xc547be6f4a96edb5, 0x1715ac43e9fa53ff, 0x521c06f22626bdde, 0xef537ee994b3860b,
        0x3c9925c6bb4ca0dc, 0x65687a2f046d5fd4, 0x63eb9d0d0221ceb8, 0x7ea17064a74ae92d,
        0x772a9b126a333e4f, 0xa6d703e265f1f482, 0xd9308c0e1f00d53c, 0xd0e263ecb896f6fa,
        0x87cf50aa487e581f, 0x8e85a3a577ce808d, 0x136896abb1836b07, 0xa28b82fd73a1cb88,
        0x22fca7a40da54317, 0x78e98cd374c7db6b, 0x006fb9d8845faae5, 0xd550edfe44ae671d,
        0x1393fa93d583ccc5, 0x881de85b1a4c2e84, 0xec1483946b7d3647, 0x844cce33704014b5,
        0xcac56b9bd8cd79a6, 0x3f3a26345f3f640b, 0xfd07f6a43fc55f23, 0xfa57096351a0b665,
        0xdd76909cb1b6982e, 0xef10a3736c6d1e0e, 0xb073052053a56d57, 0xfcc13028fa30e1b9,
        0x982abae308414fd0, 0x83bb2965548b39ee, 0xa51099df18927490, 0xdc3d6ab7454cbb39,
        0x9ec1f6c8828f210d, 0xcd7ed73fc3056ef4, 0xbf0108a01718e51a, 0x1ed4cb0cd714e045,
        0x3a2bb8694e6e1288, 0x34ada23859423e35, 0x39a88f9322f1d2e6, 0x10d693e012ae6462,
        0x49f14d06ccc037bf, 0x4c0bd3876aa74204, 0xff7fb43d1e2b3a45, 0x6441cba2a0949607,
        0x68af006d9c1df729, 0xb9b015191646a9f8, 0x0cac44cbaeeb1d32, 0x680d974306965832,
        0xaa94d5bb0ac93c6c, 0x00d072452f856ab3, 0x55323c6ff56b7f13, 0x1511ae04660abac2,
        0x524cb8f8cfa1ab11, 0xb0d1b6bc740f4e3a, 0x8d1d5c7fae38dd0e, 0x28c3bee5c2fc39c0,
        0xecde7efb1f78a4f4, 0x56d8bea402afd13b, 0x6fefe18aeb1e3e76, 0xf4191570c6813a88,
        0xccb9fc594ca368b3, 0xb02fdf73fa266797, 0x6292748c1864ca0b, 0x139dd83440bfc8f6,
        0x2aae6edb2c3152b5, 0xef567e9ffd1ccad4, 0xc6954e9f748b5813, 0x0675ccc1cda71d1a,
        0x3afc661e6f712eb8, 0x2723a9650bfcc371, 0xdb56d155831eba6d, 0x9378a8a6442b4c8f,
        0xe942fa5b9eaebcd0, 0x8447dc69c7395f64, 0x3ad4fdec0fe11010, 0xdc1c9cda1225c3d5,
        0x3e7ae70960aaebb6, 0x631475a8443d5c9f, 0xc6a642771e0e66d1, 0xb233e5dcf7b7362a,
        0x52af7f5d0c1b3514, 0x4892861dcfdb47d5, 0x2a542ebfe1c8c0ca, 0x03920a616a6bb216,
        0x544971f6cc19d3af, 0xda15393a9032fd7c, 0xab18ead2ea76d444, 0xaa661c737ee072b8,
        0x874fab15eccf338e, 0xafb2d76099d9893f, 0x9fcdf4cfabd421bd, 0x4d1d8f71acba57ec,
        0x76d16a8cc3779882, 0x38b91cce94d996eb, 0x27452423a9cfe02f, 0x507c17b91c8fa77c,
        0x1935d576e8d92901, 0xd28e7cc1fb99cd1b, 0x38e609ec5181ebd7, 0x605926a40c187c70,
        0x53ed11da025bb4a1, 0x4ba7a7d17e570058, 0x1ec796b36d47c670, 0x79871340f45e6ba6,
        0x9a3ceb03ceb3eb6c, 0x0515eddc6f496836, 0xb86d386a1a73285a, 0xfa205185dee20b2e,
        0x507e055aa7903ee6, 0xc9e3679e80d53f9d, 0x50661046a627eff8, 0x6ac1ef017e31d9f4,
        0x95bacd45d8d8f53a, 0xadc9ff423c925dae, 0xa016d64a5cff438c, 0x3a95adc9d905af53,
        0xa716ea3f5a15b0b9, 0xfc7372504cbfd0de, 0x72e01399894d9143, 0xa1731fae6d9db32b,
        0x550d68e703ef3ab3, 0x035efe5f15bb938a, 0x8191005003e06a50, 0x39033ebceda3af42,
        0x175ebe4804fc3303, 0x3079f3c77eefb203, 0x554d4ece1bc74d8b, 0x20b513640f114403,
        0x8dbac58008b896ff, 0x7cd5f7dda0238b70, 0xceef2bd85c96e897, 0xd1e3b6301e0a464a,
        0x29deff6c2eba8817, 0x9b06cc146db4a042, 0x29eefc2c672b86f1, 0x40c2b546f65795bb,
        0x06d4fa96d1af71f2, 0xae90769f1181b854, 0x35b36790dbddf038, 0x86e9a994a5569794,
        0x42417d54937638c1, 0x34e5c73a7adfbceb, 0x13f77d6e428f526d, 0x32c158204fd464f2,
        0xf48cac66188ca043, 0x5ae2e6535cdc4424, 0x63d1d635161dc0c1, 0xd69d17e3f379db8e,
        0xf539244b0fd63db9, 0x97c10230ac0e7136, 0xcb8bde1422ba099a, 0xde1eb4fef2e0a727,
        0x5e072b3c4ce82bb1, 0xb77c1f1bce0ba0ca, 0x9627127008f3e8e0, 0x0c7971cfef6b3913,
        0x41563d33e70a6ff5, 0x41e0a3cd9441ae0b, 0xcfd035beb8749653, 0x8465bcc8e3642a95,
    ],
    [
        0xe74e265bc25dfad3, 0xee43bc87b2411618, 0x94ba8fc4b31fa779, 0x0aef84c16b8a6a97,
        0x4225e9c825df8bb5, 0xca899c4f278291f1, 0x177e8a3b7336aa16, 0x759331335d21d261,
        0x70fa23ebf86bd784, 0x12537433886209b8, 0xd4668cff0f6dd908, 0x34d8ed875d279f42,
        0x50d7b19e35990d9d, 0x67ac89d5e4b68140, 0xd3aad8c2bb2a4515, 0x60d41128ffb5e7ce,
        0x538105561156ded2, 0xe26e690dd67d9902, 0x4e48e8436a175646, 0x308098a014c5a2cc,
        0x2c70499572f98422, 0x09e743877be60b03, 0xd089eba55a8707e5, 0x3e9f284fee18ffec,
        0xd967726ce169de5c, 0x0bcac95818e75428, 0xc029bd84e32dd067, 0x77b6d3d665e75ed6,
        0x4cbeb18ec4f063e6, 0xd3a4636784af55d9, 0x4d5d467f8a5ab076, 0xeb5593e7532e8d6a,
        0x88bf0bfa377e0766, 0x7304bb2510bde8ce, 0x8cb53666a1f38ea6, 0x80075fb24f606ac5,
        0xcf0f37fc21dad9ec, 0x082ccf53f3232370, 0xdccba22f8ee38219, 0x4e497acfd88da2a6,
        0x41dc4bdbc4bfbad1, 0xa0c8062a159060b9, 0x5b57a05bb8164832, 0x5968cb12b6707cbd,
        0xebeec551b3501c19, 0x5b93edb0c718ee5c, 0x5fb37c1b1757f3c4, 0x670431a2a6ec0fe4,
        0xab9d7523415732d4, 0x2ccc180a8bb1cfa0, 0xf4175f750c5e8388, 0x0447a950a9b5bab4,
        0x5754198b9d02d212, 0x0387467993e2f3a0, 0xf50003082339e348, 0x121db320f6a4d560,
        0xb0a5d5fea2ad4eac, 0x6cde3f21f517372c, 0x19990669ba701704, 0x1538fd36f2547f19,
        0x41e83eef78fa7f11, 0x290a35c436e3af54, 0x0f0d31616705039f, 0x3b0cd36fe12a94ab,
        0xd03630b9493f44b6, 0x08754bd2f07924c4, 0x8024dc850f13036e, 0xd2e7f3de0b2bca36,
        0x931f721eb5752d7e, 0x69a90324f4e64c1d, 0x5a92cc2dbc5c622c, 0xa336289acabb1fbd,
        0x711a9dbb51b0ce75, 0xb7875fa8c5a11b32, 0x48bb09ed987e0769, 0x4dd5344c1cd68904,
        0xb17138e56eb70243, 0x34afd23bc9b092af, 0xc93c8cb8797e223c, 0xdbd8b542aecb96c2,
        0xf812ce5d721f3e68, 0x1a6061f4b58e7e78, 0xde53c427e05dc02d, 0xeda5a59dba40c0bc,
        0xfc71fee2ef8661c5, 0x2277ebc3ec8750db, 0x914046cbb0b90ebe, 0x702d97f51d1b4e80,
        0xa3e81f936a0fcd03, 0xd2f1554a9a95900a, 0x25982357f77f8962, 0xbe59c8da53053b45,
        0x507ba0949c2f826c, 0x0e709a00d7626b67, 0x9aa3f414f4fb8a45, 0x94092904f02a1ee4,
        0x870a24dbe75bf57b, 0x5dbc4325e48b16f8, 0x9be29ff64989a568, 0xf984b5a2bfc10e7f,
        0xd780d315c52e24c1, 0x01b55dd371407825, 0xc94364539fbb36ff, 0x8014a215e5c86482,
        0xfd1121b185964942, 0xc19f2608d9305873, 0xecf6620f885ce4d1, 0x1895ccb45c1a2b4d,
        0xe2b878ebd89cefca, 0xb93a225fbb075836, 0xa27d6c0289128aa4, 0x49da0b4235964572,
        0x2951149d905ec0fe, 0x70c185083a09c912, 0x7e090ce8a81226cf, 0x3b2f98bd41bb1f1c,
        0x9cc9e61e230d0213, 0x462e5abf5b646b64, 0xd69b7693eb0d80e6, 0xcd0a4f03073582a7,
        0xbb950010abdedf11, 0x9acd4f0926131459, 0x8aa3f76b47b67175, 0xd85c47300e7e84ee,
        0xecaa250cba6367e5, 0xd2326cd8e3a643b1, 0x7282b08cca701676, 0xf364b3b9b5ad7c48,
        0xb3270892bfd6d473, 0xef2050334ac92557, 0xfda2af6382d754b7, 0x721c6c095b174d43,
        0x3c4ed4750a3b281d, 0x46cc5d428d62916e, 0x33a35a2c1789e029, 0x797db2f3631b3b61,
        0x83bb4a9082170008, 0xfa63cb99bd61176d, 0x794ed2988d64b6fd, 0xb558b71d24abd550,
        0xb61618f6aa8ae7e6, 0xad65cae9fe1ad661, 0x0f471e4912a77d46, 0x029ab3dd0b5ca788,
        0x50504d407ccdc8cb, 0x960ef741480dd4d1, 0x9728a4c597d31bc6, 0x0b10f7e0b718a5ae,
        0x6574e022ce08043e, 0xf1e9d5947aeaa545, 0xb01180b263fe6bc2, 0x2005ee57214c4da1,
        0x171faa9ddb1b1733, 0xc63c2afb03846833, 0x7af256ca510b7cfb, 0x054d089f54fe92cc,
        0x0e877a6e6f4e49f3, 0x135725fa4c6dfc8e, 0x9fa0422e5dc1fa84, 0x379b32e8200496c0,
        0xc133cb4979e77976, 0x47d17ab28796db7b, 0xbc5a7f87083a7fcd, 0xd3d91aeaf056142f,
        0x0263bcab23a2b699, 0x86e0fe944f7f4038, 0x83cecbf58ac12c9d, 0xa627d78fcf94ee40,
        0xe462eb9c0c0d85ff, 0x0d6213c4c9609521, 0xde28ed2f045d3b88, 0xff30915737f0b240,
        0xa0a347576b4cd6bc, 0x87a08c947aa0595c, 0x3b74f56f5e629309, 0xbb12d1b09dda5c39,
        0x94bb2c6374350478, 0x318c41c25878201c, 0x5209107eeda6a1ab, 0xd89bbdd759c62f08,
        0x7677217992889e33, 0x6fb19edad7ae0e67, 0x7b00b43b5b9d220b, 0xbf469f9a6e841041,
        0x081024ce6264c601, 0xf3629a43491f59d7, 0x8bccff3edd0a6e9a, 0x00799e9f306f5fc0,
        0x9c4203478def6ae6, 0xc208b2b33580f9ee, 0xb05e8c3e13796941, 0x96a7a2a78e768469,
        0x5b2d95431c5ee992, 0x6e7e4fe6ee0387f4, 0x4a784242ae9ea9ae, 0x5719cf31d52ccc5b,
        0xcf9276824a4668be, 0x3c802e65ec1007cc, 0x6f91306e4e4d5573, 0xc2cedb25d7e6a511,
        0x8f096ee9630602dc, 0xebb204ea33378ebb, 0xaf89d530fac845da, 0x3728e85040df135e,
        0xedee15b0abce12c6, 0x4f402947e02d884c, 0xa2ac9434600872b6, 0x8b1148a2190eb38c,
        0xb559ba08c60fa4fc, 0x7fd0973675589610, 0x01a071295bb3bd37, 0xdaf7da8c5b8ad9ba,
        0x3d17162e5143733c, 0x4156456244c03394, 0x1ffbc9687ede9d83, 0x1c2104132f5ea2f4,
        0x0bbb5e913828e41b, 0x703d02206d1e8753, 0xca397f37446925d7, 0x2f2327e06fa4758f,
        0x050c204034f56868, 0xbf6328d9133a6e20, 0x3205c05fd02cfd2b, 0x46fb6e9e360a27c8,
        0x2f14924df43b6f18, 0x8342681794c77832, 0x90d0129c44ca10f6, 0x770bee0b4afdc017,
        0xdc8dcd2f9714b577, 0x1a623675b04159e9, 0x591191b5f4cb1ebf, 0x7647708d9ca36aa3,
        0xade1ccb32b012d88, 0xde2b91349aec4539, 0x3eb11759b4502308, 0x374d983eb90875c2,
        0x0159129c70bfdf88, 0x401d2620c31e3249, 0x24b5ad842f7aeef2, 0x64170fe172d3de51,
        0xe6b63bfde9b1ada4, 0xb9f207b164c01149, 0xf0a263cb7e5ccefd, 0x26bab3703ded069b,
        0xb1246608f5df6cba, 0x01e8a27fc3d2dddf, 0xde0dfc80497bbcf9, 0x4314f0f65eb2d753,
        0x6cc7faf2aefb4115, 0xe944561a41a037dd, 0x4173fcda24f49029, 0xfccc6a3749ce114c,
        0x99efb3b1250b9e58, 0x2419c6614464a9e0, 0x5250012efca06e08, 0xccc31c7e1bbc7cc5,
        0xeeb94537a36f7c5f, 0x51f3e2e276961d0e, 0x67dd14abf9887947, 0x6c7361f03adf9517,
        0x1b7f358e75b7e90c, 0xdadcf2aa6219cfbb, 0xe5a2a581da0a46f5, 0xb8806f3410355332,
        0x7d275fc97f15e77a, 0xf29a29a070c135f6, 0x574456492d06e70d, 0x9329e2b2cfe86519,
        0xa99ce250cc7205fc, 0xd0a48fcc6b1c40c1, 0x6fb1c7ef915f730b, 0x59048db869fb1924,
        0x862a83d91d6bd879, 0x5a20a1a2855a8b2b, 0x83c08a98a74a0fcc, 0xddc7128587394cde,
        0x3bf0b448730e5b80, 0x57943adc4de9f7ec, 0xe16d336f3c52c09f, 0xd24a486ca4149949,
        0x789a7b2ef0828387, 0x47f5fe5704a357a2, 0xb3dc7be5e0614e1e, 0x948cf03f5d2b5a01,
        0x8fd667c40f119e25, 0xa4b743b4a87031f2, 0x3eac28fa078836b6, 0x8a3377ba62005158,
        0xe561dc90aa94cd73, 0x6781850e9878ace2, 0x1ad274bbd724b7e2, 0x3c42ca886c49c827,
        0xeb16eca855622b11, 0xf908ca59bc4df337, 0x693cf383f03c1632, 0x3d4e8bb187e108c8,
        0x2eec3503318f2aa3, 0x4a2a6476aeddf0a6, 0xe97f1db24d9f94b8, 0x22fc40c6c4e815e7,
        0x26fa3e53489502ca, 0xbe6928b4dae2cdb9, 0x54a962ccbdc89596, 0xea8b2b16a4a2f5d9,
        0xd09b4d4b13e8528f, 0x89fdd9eec58287d9, 0x9fe05a3610c704a1, 0xb0db4ca569ea63ae,
        0x821766bc8d491280, 0xc9e696394bacfe2d, 0xcfe2e3f30c2e851f, 0x090210018c498414,
        0x905112898692a7a4, 0x07beeabe826d1b5c, 0x2a68891161c18233, 0xf9cff5e83fe08120,
        0xdaf311ee79b2298c, 0x87123d3abccb2759, 0x7eb2341a980c5ea3, 0xe70ad5d0080dbb92,
        0x9befc01d8ab0b81d, 0x2b69d41737eac10f, 0x7f2ecfc4cd555a0a, 0x1e264169abe20ff5,
        0x06e5c24db7a29b9a, 0x942870dcd10258b2, 0xfb532bed42640bba, 0xe5f1fb4a5d0ae37f,
        0x63516a6afe727ec7, 0xf53941e9fa29d69f, 0xe2a1a8c2079e70a7, 0x48ad17fbac74cde2,
        0xe438efc969e0d75c, 0xf950c9f78961487b, 0x9fb72401d254d363, 0xcd2149f0b18391a8,
        0x2f8f653b836e26ba, 0x3ed68662355b4e0f, 0x233e400fbc345df8, 0x9bdb27cde43458d3,
        0x56de346a7cf94b5e, 0x09dd58f92a220cd5, 0x32270ecbdf40338d, 0x3869a33923c8e201,
        0x9465cc16fca60b9b, 0xaafba53ecdc17255, 0x3b64cd27bbc4cc93, 0x47544c4c9c23b83e,
        0x881dd34d13b47d3f, 0x62e90e6713825d07, 0x53bc0189fc3ff573, 0x1a3266c10de3f191,
        0x8c420eb2d6eb695d, 0x7f747b90019e97aa, 0xa5290cbdcad5f069, 0xb620c4e80aaa3139,
        0x94b3d64901118edf, 0x1b4f1ffe816162ce, 0xaebd3f9bcb6abaca, 0xacdc3223516f8b28,
        0x656b44dadec8a13e, 0x89222dff5cf2e85d, 0xfa248583eb83f016, 0xf2db27be98d18506,
        0x7932084f285be050, 0x4b68e1065a226630, 0x6e8bccf8cc2f3d5d, 0xde1bad64e590be92,
        0x6bed3d25685bf239, 0xdb6fa8db05c43da0, 0x3784d7cacf133aee, 0x57b32f329133df68,
        0xe148f47096bd3df5, 0xbc3a134e712e8afb, 0xef7793d17e91d378, 0xf63d00ee859275b7,
        0x2bef413560596012, 0x0728a9073a1476cd, 0xdf54b23978b9fa8f, 0xdf876a1fc2be9f27,
        0xb49200cf69b6dff3, 0x5d36fcf31a77d469, 0x92f5aeb1a41defb2, 0xfb201e9256fb0f1f,
        0x483cdb08188b45e5, 0x36d0f45f73757a88, 0xb37c4244f63a46aa, 0x01f9d99769eacc0e,
        0x0058967aa167f2c8, 0x77264e68a5e142af, 0x88ff0f114a7b3ae4, 0x57cf26a55d17c5c7,
        0x6b06827a1dce9d38, 0xab97b39a9917da42, 0xd2ef1779f524fc03, 0x2ad61b2230b388b5,
        0x1feb6a105084b390, 0xdb1cd811206d1752, 0xf521e33a6b44796a, 0x6bece5b6fed311b9,
        0x8587e6dfeb26ca11, 0xd3786f45e76595b4, 0x9578c5f2cc3e0edb, 0xc698d9724bd7c11c,
        0xfa87a53e6c797797, 0xdf848ec806973808, 0xb55ff5c67eec7039, 0x00f6e4100149992e,
        0xcb58e90aab630d23, 0x8f94c8eb821af8d5, 0xbd762df5fb99bbc9, 0x338590fa6c128d69,
        0x2a6b636dca8e9a6a, 0x7004028eb85f3c45, 0x2c45ef0900b02100, 0xe60fad96c94d2127,
        0x99e41ba82f04ef79, 0xa0545c85949f9b08, 0x886b1a7c86a4e0a9, 0xac6b512dad87890c,
        0x6bafea64ec66879d, 0xb51289522d60e05b, 0x1427c1540fa26e7a, 0x74e4d4361d955038,
        0x90b7aac8cda13a8c, 0xad92a1d3084a0245, 0x63a273b4cda53ba0, 0x2854a948aa9ae62e,
        0xfe4998f471912b0c, 0xdc38c2fcc9d32e4f, 0x4c1df22c312e9241, 0xb7f93581f0b9b0b5,
        0x83023ad91a14b7ce, 0xc31354f0311a34a1, 0x066c311637af86c8, 0xc79a22d05a17efbe,
        0xc1e9fc70ed753b73, 0x5d943a868af6d30f, 0x9e43eeac9d266a5b, 0x228fa809f1c0385a,
        0xfec5209a0f0becb6, 0xa91f41a07d4a1abf, 0x714cf62737596f40, 0xe817c72e6939fdb9,
        0x5c7f17bb559e51f5, 0x5aafd58a49b07e5a, 0x203244e00e62453f, 0xdfce7a1e29d99f57,
        0x44c753b701e4648b, 0x38b967e52b0c7d35, 0xd032cfc1ff71b4b5, 0x721eba63c2e635d2,
        0x9f1a6fb9a4ee62d3, 0xf25675e2089cc7a3, 0x2223e7b6b8ff7a71, 0x82e8df4768c43ec3,
        0xa01a5382023b31c2, 0x4677cfea45947ae4, 0xeaccaaccb137bb1b, 0xebcbc1adfaea71e1,
        0x7b3489549c80d42d, 0x863b0dede99fd891, 0xb7ed2e8d97c9fafb, 0x5edbe9b99ffd29b9,
        0x127bd9058c8aaf7b, 0x72a6999d0bdedcfb, 0x0fe89df2f144a31f, 0x2ee97fbc3540be14,
        0xe8b9edfa6487d014, 0xf1d5def1d3950024, 0xb5ffb31438a63fab, 0x54e97b46f0a367dd,
        0xe7d30293a339d4b4, 0x4d9918bc35e37920, 0xc1ef0d4d04d7177f, 0x5724008d76842160,
        0x67b081fb107ea18c, 0x0465c50211751be0, 0x61bc02ae34360ef7, 0x41553dd1646302f3,
        0x7f427bdf71e6d054, 0xe0a0bbf8244bc083, 0xd2481b5a8d8fb13f, 0xaee62df70eb61f92,
        0xc35739c0c4ab9f48, 0xb47ca0ebd38cbdf7, 0x4f0de89401bf37af, 0x7e4a198cedd68905,
        0xe7f3a5ff214a530f, 0x29644a602138063f, 0x9692973aa228b7b9, 0xd614a72279e39df1,
        0x3dce0a87c60b88b7, 0xc51a624526542f89, 0x8ffe6b0dfc30f0dc, 0xb007f4dde115d67e,
        0x4bffff63d0505d6b, 0xccfbaddbf1521976, 0xbf32ca04d7ebeb8a, 0x576976a3f8ae3c2d,
        0x840e40edd6cecfc5, 0x65eb5f99443c942c, 0x9c81d68b1766c5c1, 0x44259d51694c3318,
        0xad0907a6d1ceb42e, 0xdf58ed06a7a119c4, 0x2c73ddba24e6a879, 0x244a1800d34d0e43,
        0x117d0cbe424be7e9, 0xf534595b6b71e237, 0x7434121896181756, 0xc12a02b006457da5,
    ],
    [
        0xdea72ba62a80f39c, 0xf77a79cfc0e2b70a, 0x793c4880b981d96f, 0x3cc32acc71192348,
        0x2fd4cd72f45831d8, 0x59d2189659471f1f, 0xf2acedc62da8a2a6, 0x38cf4c6f8d9fceb6,
        0x713b2bbba56af433, 0x896966978e93edd5, 0x7083209971640eed, 0x7d876a599a93a5c9,
        0x5484b2c55df47226, 0xb36c017dc145a6c7, 0xf71b09b1b00d9c0f, 0x218e68f9e5137d20,
        0x67786ba38ff0cbf4, 0x36136612f7ae5a67, 0xe2cd131b05545cfc, 0x72357752b3d7004e,
        0xefc76468d7dfec55, 0xdec30331e3f832e8, 0xdec8954b1d99d3e7, 0xb1d858daf4e36023,
        0x173bfcddccf915d9, 0x735e35111ed38ef4, 0x81f572458cc52417, 0x2c167c88199241e3,
        0x97815de26bd322e4, 0xde2d1ee642253804, 0xf9cda92a9119c117, 0x28c7eb34649966a5,
        0xe568acb665b8f5d7, 0xf5efd71f932dc388, 0x677d7d48deb203a2, 0x6013718797f3cb4b,
        0xa23c2b054a536998, 0x8124d6e27cd66728, 0x99bb28cd8217e4bf, 0x25f7e61a42db4eb8,
        0x7312423df61c68d9, 0x49eb799459f62fc6, 0xc0609130de227de8, 0x64b77e39159484c4,
        0x6a8bb2dd65682105, 0xd2a2d48495597766, 0xf786b821967c8a60, 0x33f1ef5ee49aebb8,
        0x2ec93eea31d038a3, 0xbd49062b54924618, 0x4b950c04602a871b, 0x7b91fafdeeeeb2bc,
        0x1964c681f7bd0748, 0x537067022983aef7, 0x990ae53ea8198c1d, 0xf94742afb4dcddad,
        0xc643651468c3ab8f, 0xd594c1688674bfee, 0xeddfbeb4222021c1, 0xe1934f1d842a9534,
        0x548b95b2da8b1c93, 0xdab8876d7c1b9ed3, 0x6278b4b526c2b53e, 0xfe8d546827502203,
        0xcb2174b168cbe088, 0x2569c8bcee8cbae7, 0xf719d828d56fb2a6, 0x545401bf3f17ef60,
        0x85978fa68be40d9f, 0x2e613decf6303573, 0x03fc8cf82f4a0632, 0x11e85f78ab528f38,
        0x45aaf2ce5e82f947, 0x35cdb8e1b7ea4f45, 0x916b19523ff407e3, 0x026be75ca8d12f61,
        0xfbaf90428802da81, 0xcca64382968798da, 0xc719cf629c72c80a, 0x79588cba0f7e70ad,
        0x85738a440565d337, 0x11f43d1ceaff0924, 0xa898da2c3ae20d7f, 0x167db0ed817bd377,
        0xb1bc3feec0831696, 0xa9b77f3be50fa9e3, 0x5287e954a48262c7, 0x4a1282ce73e6dee1,
        0xad4525e1c2d46f6e, 0x7c97f284cebe5a8c, 0xed0a90792f274090, 0x98c1df6a7209ca37,
        0x0bf6fc83c1f77fb3, 0x6def6cebdaf13e57, 0x7b21ce82f4f833e1, 0x97587f4f26639e19,
        0xea8ce1b81240a545, 0x40f8681921a37385, 0x4d4108fe8b0168e1, 0xf2b66d8f0a29d865,
        0xdcaf45b3a9be2e14, 0x5906d1b455efbadd, 0xd6aed2e58291e54d, 0xfdf055753d62869d,
        0xb1c4e10f20bcaf77, 0x5f459faf3c91862d, 0x40d2691cf1d7ddf1, 0xd419d4bd523e1529,
        0xc1362a9c00bd952a, 0x5960ac1fd43dc7fd, 0xfce01b37c17f3d99, 0x9ead51e40fcea2c1,
        0x3482a0d75153f8a2, 0x34c44f4541e7e7a3, 0xf50cb1ef6a731537, 0x56290f9833aaf2c4,
        0xebcca16f9d920471, 0xa5f67b0b9b458edb, 0x295beceba07e7ac5, 0xc49cfa2144601959,
        0x6fa0d734fe8d6b46, 0xe59ad38dac7d5ebd, 0xa4fe57d04e7a2a8e, 0x7a2ed2c153ed73e2,
        0xc09a9598a1e1c0cb, 0x88aba90fa2606f83, 0x4ddf26ce1b1708ea, 0x985039d458ade316,
        0x9c73ec69d6bd1cc1, 0x392a5dbefadb18fc, 0x9fcc236f8149057e, 0xe209a493cde25b0e,
        0x38106329a9301111, 0xa799579478bf5a4b, 0xe7ff136b5b82f03a, 0xe2896d2552303b2b,
        0x9882571a106283c7, 0x36f8305dfed33d87, 0x4cd5888188440bc0, 0xe49900ede9b2aa43,
        0x84146315087adadc, 0xd13b63768d0eff5d, 0x310c5aebe00a49a1, 0xb6d37f5258b86b0a,
        0x9d3b35ecaf9a667b, 0xcfee088c39449b96, 0x501cd84950dc4c61, 0x5d45b3dadfb64d05,
        0x0996811b5f52433b, 0x20febc215167c6a6, 0x1c6fbd17cc3530de, 0x6ba8f8bace1d71cc,
        0xb7ecec0bcdd2382b, 0xd405931324fecbac, 0x98c3372efdd0ba2f, 0x09a1583fde89e412,
        0x493781678b4f7152, 0xae09fd4f05423bab, 0x87517bf5e4f99193, 0x0724cc000bce0f38,
        0xb95b0db2555fac44, 0x05395fb2ff935ef3, 0x16be4ad1ddc3d24c, 0x93a4a37a60064a5c,
        0x515ad15ffe346ad1, 0x7e17855a827f2741, 0x8f9067e31c92a65e, 0x8b36a74452b31c23,
        0x4df2850df168ee57, 0x1c10f62146d8f2e0, 0x60349cf4f9a73890, 0x1bf9510c143dcf7d,
        0xef5b3d89a6013753, 0xcf095b6f8d6db685, 0xe23c00a11f2a8575, 0x1f800a68f8503f28,
        0xedcbe9146641b5d8, 0x0039f3d2706bd0af, 0xb87a1cd3cbe5e4ef, 0x57abbd2779c7bf9e,
        0xa72b40cbab4aa03e, 0x10789b907db93ca8, 0x576f790f48c2d246, 0x07b3f1d130c18470,
        0xe5fccbfcaf7f49c7, 0x080a6b9721645a1e, 0x0fbf6bdb2de56c47, 0xcffedd583903924b,
        0xedd80ef121d80851, 0xcd21a408bebaf9f6, 0x704207af6eb0d845, 0xefd373f10a687415,
        0x6a2dbe20f20dcce6, 0x59bc96b43ce6a0ff, 0x318c63ecb4d65c2b, 0x5c11886b663abab9,
        0x1527e4629e5979ee, 0x20adf6b5bf19fbe5, 0xd5841c4d9e88c421, 0xf929675aed68c605,
        0x37de12ca9b9c3c3c, 0x57623440625642d6, 0xd9fcb83dc280e977, 0x44d6dc80b3a68dad,
        0x6adbcbc158d593b3, 0x06e39e2d2206e681, 0xd01285e51b33c5e6, 0xcb281c987cc591fe,
        0x45a175128f5f540a, 0x3dc4835970c42ff6, 0x10e287d43374e7f0, 0xed4b7fc4f0b414ac,
        0x6b8b6daa799649fc, 0x0ce07d1a76fb0f13, 0x6bcbea5053af4211, 0xf5b7d6b4cbbd8eb9,
        0x01ae8291d2b76c84, 0xf874ca4bde18c42c, 0x49820f413ae99478, 0xc19ed5b9c792de48,
        0xfdd476efbf0a1712, 0x6f6c17b8ad46e409, 0x1b7ddec94eb412f9, 0x63578add4ae6280a,
        0x01d18170768333dc, 0xc2ee43ac1b615e8e, 0x9b0ea3879865df69, 0x7dee9bede8c3cf47,
        0xb9c06a18b7847640, 0xab525dfb12c6966c, 0x120890ea1540b9b5, 0x83b83c891a5e8d4c,
        0xed07a4de180985e1, 0x7e669c9a252954e7, 0x3f50005df9968132, 0xa85bea71ed5cb4e1,
        0xc87bbacb8fdfa22a, 0x87232088a85618f3, 0x7f56aa1bab6ff8a0, 0x7881853134a75f67,
        0xc086e61be516e387, 0x146cadc60be9a628, 0xb1fc48943dd1c601, 0x568bdee62b1e1ecf,
        0x4397d6afa05624fc, 0x885346f0fd27cd55, 0xe99ab2aee3ea9864, 0x2736cb996e6afc82,
        0x42c88c53bebcc58c, 0xb900f0e1f221b37b, 0x819588e76fcebc6c, 0x7c9dbf55b306431d,
        0x4684c439c283f047, 0x09da66960042a162, 0x60533de30f5862ef, 0xefccb79143526774,
        0x20a5150beeaae9da, 0x287f04f48b551005, 0x5269c1d75f95c5de, 0xe61a81b128ec7c90,
        0x97f71c7e76c5fc8a, 0x3a48c95f1574d34d, 0x75a4d66f7eef63f0, 0xfbd2237410c708a9,
        0xcb463af2bef10529, 0xdfd9b580945dd7d6, 0x0d3df9dbdf6cda83, 0xf96b116b7d23e11b,
        0xc1fb389668b97533, 0x1d9dffa43add517a, 0x7b23e7c705aa6eb7, 0x30e03fed8fe40e06,
        0xf1ae5171ade5a5ba, 0x4072683abf208b67, 0x90d6326f38aea879, 0xc178941b0bf1dd64,
        0x6e9f7cb6ab518b64, 0x9745deade796f8a3, 0xe3533bca4dce058d, 0x60f8bd505aed382b,
        0x2d1e2a91bec6b980, 0x9ab736a8dbb829b6, 0x1c47e09fce373d3e, 0xb8dd1b1d74dc0834,
        0xe87e1977f2f9883a, 0x966fa09d6c345cd3, 0x7a30dd576b077498, 0xf1beaa57c7fd6a1a,
        0xf938b55eab1798ad, 0xa3bb6518e82d509a, 0x16daf9324c50ec70, 0x748833ce0b7ee8b8,
        0x8552eb06f35bff4a, 0x065ae99a758e0cd3, 0x227d7c86ec60a215, 0x72d38dd35d9208bf,
        0xcb353d6b2fba1f23, 0x4ccf659aa83f6c57, 0xb4be853ef16f44b9, 0x73a4cfd2ec715818,
        0x74fbdfc031bb19e4, 0x91497a4834753c7c, 0xdb73869dd193dfcb, 0x1aeb3760b70ffb27,
        0x038142669b875513, 0x6d5d502057d48746, 0xdf402711a516617a, 0x58f8c80c470f1d01,
        0x372d522ca94fca0a, 0x3af5b0c82ebb5f15, 0xcf4959f243e2d400, 0x401fb234e24a8785,
        0x7d2e2fede2a0f7f2, 0x562dabce04cab97d, 0x14196961df041e3a, 0x61a72f1056e06ab5,
        0x07ca41f387333da3, 0x4a9b8b212d66ccf6, 0x2b5945dde54393c0, 0xeef8d46e0f4497d9,
        0xc935e85d9df630da, 0x7efe3aa5a44b2bd8, 0x33b3745fd0efd6bc, 0x18b125a675b57f5c,
        0x205fa473f1f33056, 0x95488f0909323ceb, 0x92091ade2865c14b, 0x4682ca1740d7e5a7,
        0xe18d763dd771236c, 0x965ffcb5731739bc, 0xc629414e3d55047e, 0x12791212b6814209,
        0xa6919aac954cc1b7, 0xe670e6c810d95fef, 0xf84188b16bc88677, 0x394ded95ed9ca793,
        0x720e282339869be4, 0x35a7c2bebe15d18f, 0xc48d9af7ef43fa08, 0x43feac178fe835a5,
        0x6a67a00938a3a2ab, 0x2cb4eb1fd95deba6, 0x6fe62e64fc9cdf00, 0x47b405193f3a46b1,
        0x1b0040be7008a00c, 0xe914bdde82ff128d, 0x875d79206dd12846, 0x9d458529a04456e9,
        0xdbb2fcbf9ad2d034, 0x6c8aa1e947abc35d, 0xe060625f0ec44230, 0x83b1a5337b017e35,
        0x73a0d9dd999a7e5b, 0x3a87d5a230b93347, 0xa4799bda478c96a3, 0xc07f2f6d56f89483,
        0x4fb792e72b7a29f5, 0x0dcb8f5d517318a9, 0xb6609e85556d8c65, 0xbeb8873b8cf7b6f4,
        0x00ea9094778cc15e, 0xdc2b77ebec0a0a03, 0x48bf4804799caac5, 0x88b11d0e67f475f5,
        0x7d05802932bfe260, 0xf682e372d6353024, 0xbec02c94d644733e, 0x1cca590acb6309e9,
        0x6d37fee337340a4f, 0x0ea43f7b82caf4b0, 0x5bdd1d67aaf63c65, 0xeecfe3981b9cb76b,
        0xe1010d603035b9fc, 0x282e4c4a2a36b2a7, 0xdd1d8fad7a39dfea, 0x9af8ba40074f51ea,
        0x694eb76c36a18b26, 0x5c3087416f472462, 0x76a3143740cd4f23, 0xb46cf5cc616bc5cb,
        0x173ec4deca79a8f4, 0x34c7490444d5a648, 0x55941df2145ea298, 0x4152df711601ab9a,
        0x2147144fa1634cd8, 0x0e9cb8ed6ac447d7, 0xace344d54ae87c64, 0x86d1b45afad91696,
        0x7bb9d24ea6546a05, 0x450aee7f552df9cf, 0x7060474c64fe7ba3, 0x4242b5c59041047f,
        0xb47a69ca62935de3, 0x34588e1f637bf127, 0xe05738a8c16b84c9, 0x3e2807cf6cc65956,
        0xf301b2e427a4ddd0, 0x0ecb51abf1c7c7a8, 0x7e034cb564be321a, 0xf1d22cddbcd3a3da,
        0x6893f14a5352d84b, 0xe61d2748e2c3391b, 0xf8f4886a6c20f168, 0xe1c23a176a014609,
        0xe55de954928209e2, 0x062e7cac4caf2afe, 0xee29fdece8ec4cf9, 0xaed13bb98a997d93,
        0x6ac708d77d555120, 0x6e949babfd0f362b, 0x7a9e797315d5bbb1, 0x66ef5463ad0ad39d,
        0x5afdd16164e1a4c6, 0x02991686e015a566, 0x0f355dc4b0e5446b, 0x01c027e3efdf2ed1,
        0xd2359bb557fd9b51, 0xac0a5ad05b130bcc, 0x4ef24d3f7114d3bb, 0xd71a40d8d24b406f,
        0x1cce2af5a41a38b4, 0x4875664542441f5e, 0xa6a26c3747f8c8a3, 0xa3ec5c36cf90bcb6,
        0x4967faaa20857170, 0xcf09ad072cc6b8a2, 0xe6a648763c562849, 0xbfe170d84d12361c,
        0x54a4cce4e53da990, 0x7889ceda0c9b271c, 0x283117bcf7b43261, 0x8d09f3607170d241,
        0xcf78515ee5d17ab7, 0x11a089278a064d34, 0x020d10626e559bd9, 0xc0ffa4de311a0634,
        0x9f1f00cc4f788d44, 0x2f9d5d8ba6d88bd4, 0xdd6ff9c2fcd7fda0, 0xe1acc646a9faed0c,
        0xf0e6ae436b0f657b, 0xa5d87e23c7c4cba8, 0x44acd14d8e1a877d, 0xecf07e10f7c22216,
        0x89ce06f2b4aec6eb, 0xf3fe98e93b0e9564, 0xe2b500b6c240f654, 0x4250cd2fe47b2ad1,
        0x5eccb56c44f3af02, 0x9b4eb10a7783bdd0, 0x238809d6dd30ba2c, 0xb31a786da4c3f7ff,
        0x0e282a5cf84c4d35, 0xdf016f7a53557500, 0x4056724cfe30cb3e, 0xaf5710530f9c6840,
        0x4798e91f9a41e09a, 0x936c0ba0539d21c7, 0xf4bdc724e8783570, 0xcc606ca7f405ffae,
        0xa15c16ebdf1a07b1, 0xf17dff5174945305, 0x270df734e884323f, 0xcb88cb270c591130,
        0x919a4f15c784dc20, 0x0a4109b139921d95, 0xc5d34a8623ccac4b, 0x63255991d5e23bd5,
        0x98b6d0a73da81142, 0xf50ce06516ace879, 0x7361797dc8d52f80, 0x6cc2260e4dc6e35d,
        0xa60175680d745eef, 0x275824cfffea2e79, 0x485126566d227962, 0x8d7df4a1e641edc5,
        0x0e43f9113e435191, 0x39b3aeeecd2f925d, 0xdf324d65bbd2df28, 0xf373d4ead2d31852,
        0x20f1d4fd77fb4e5e, 0x91fe8fdd9154d73a, 0x30a3150946e6bbdc, 0xbe3b2e8febbb7655,
        0xde68bd0d02b42414, 0x03859154d79d535e, 0x4c850fe3f1204bdc, 0x35adda6f9a6d5fe7,
        0x9ff70dbed7153bc4, 0x231960fca97aa2d0, 0x2f4d487f854f283f, 0x9fc48e6400a0f979,
        0x01acdff6822da672, 0x7126504e18340951, 0x920acf5db4108e39, 0xbc970b5ba0e0d0f8,
        0x0c7cd8304119a759, 0x30c0ef4095638fa2, 0x4dec26d081ec09fc, 0x425fcd130ae99877,
        0xfd00ec756a88b672, 0x6f016bda9856b7aa, 0x61c25b3eb6ace55e, 0xd5a5f789c9667008,
        0x8a0f625548f1ece7, 0x5237fe169b061062, 0x227a35c637d7b7de, 0xa4bddad9d9364b3a,
        0xfe6b0e9215aaf7f0, 0xe4a8a352221aa4a5, 0x5a49d8f1cf9f6934, 0xa2b63fa5fb048180,
    ],
    [
        0xd8a6cb6f787d1f1c, 0x504ac041cb73887e, 0xaa66c201f8e156c7, 0x6f154f09a9e0eeae,
        0xb8f3851ad36a81b1, 0x5b37cecc822a3de0, 0xf604604ac26e5588, 0x9f116c8fe256b02b,
        0x8db694265e1410c0, 0xb5f44fe7f2602323, 0x1afbeaece6409e21, 0x20b19223d39e1ee4,
        0x10e92e5ad511c3f8, 0x9f314e85d075dd65, 0xd2f8e2978af2bf74, 0x31a02241cedc2c97,
        0x68aac84a93519f31, 0x1ed1aedb93904766, 0x06ceaa620005acd3, 0xbe99380540096f25,
        0x5c9211bc6450a179, 0xc33ead7830c313da, 0x96ebd1f0f59342e5, 0x9e3ea4fdf7a2df83,
        0x5a09a32e0c89e9ba, 0xd2e43cbfd20578af, 0x255ca13683de31cd, 0xb0f7a0c3c0a9d128,
        0x313fb103c80b4196, 0x420d5473ae165e6c, 0x215d7d33ca7c4d4b, 0x2ea0c2bc9a8f42ff,
        0x038a736dcd481ab4, 0xca6e0e7bfb956184, 0x4f7d6f7d11befe9e, 0x029f1cb22e1dc01e,
        0xccd2209d71411a86, 0xa7459e7fbb05589d, 0x04c86d8e41934914, 0xbf389d37717381ea,
        0x3160f928ce2f1af2, 0x1ff6c81f7c3ec388, 0x193338ee76af2af7, 0x03713ac5be8110ef,
        0x18cbf622b5dae291, 0xffbf984137211fd5, 0x32e53f78edd6a17e, 0x44892091e3889cb1,
        0x9ceaeefececd5963, 0x3ffbfeeb1ca99134, 0xfed864d0b0a88a4c, 0x5028a4fd029c247e,
        0xbaee27bb524bdb34, 0xa0a15b27f3ee5c4e, 0x66b4df3b85e89e17, 0xeae495e3394d7a92,
        0xeb3fd493e51b53bd, 0x36e7251ae4e52a8c, 0xa3b031b2f34534a2, 0x8392350a7f76462f,
        0x53bdda6d3a11712b, 0x246596864b6b7705, 0x099d7d7a4f33655e, 0x6607179c7f034ff4,
        0x427bac943d219a66, 0xf878b618c3ce3a33, 0x7c7cf22e1ab2e3fe, 0x2246e6feab05a657,
        0xfbc62bfcbdad7ad9, 0x422e49b1a98a37c2, 0xf75816ffa7ec3971, 0x71495693fa5946e0,
        0xb21f3c6aa70d0268, 0x772fb6a65d68a3db, 0xf6714651317f7967, 0xc8832a2c4e3e6c2c,
        0x17f1301d18b62b7d, 0xc0d39ce0b9e26b8d, 0x98dbb4436c48bbec, 0xf0f5489b2b632641,
        0xe14c35c1c0b3660a, 0xcd5e0cf6376fd0bc, 0x09db6b2847555053, 0x900d4bddec820131,
        0xd448a70af6333f95, 0x86f96c3a67eee139, 0xd48693624d053375, 0x8b68b26b64524d44,
        0x967f9dfb84f2466d, 0x5566460abb5819b4, 0x7ac532ee7795eb96, 0x2adc34d3aed0d3bd,
        0x25449ece88c7ac81, 0xefe137cd108d8575, 0x773f3ab3a095366c, 0x629742404a1c029a,
        0xc4b15c5c396888eb, 0x6682b6e31f660ac6, 0xa88f1fce7478fdee, 0x7699d92efc429483,
        0x94d576632223e6ce, 0xc3a39592bfa913d7, 0x26667c76ab7facd4, 0xefd9e98406bc5bcb,
        0x61186d84364f56e4, 0x53545b0540a8e2d0, 0x0488c19f6914ae66, 0xaab1917d50f989d3,
        0xce2905709356b88c, 0xbd704a6b04a81410, 0x6ce6da9aa2194fae, 0x123fc555d45ae338,
        0xe84f200d6105fc29, 0x0a4b56f6d07a2dac, 0x3e6cf1526b1fa305, 0xd6225a43a5ae3e76,
        0xbf22e1c982e47e71, 0x1721c5bf54622215, 0xc94fad666fc30672, 0xcba23153b90faec0,
        0xae7807db69ec567e, 0x3acfe89b94705324, 0x44136619de46f581, 0x659ce7db0c216ccb,
        0x30c384bd40fba3d2, 0x04143a8a4aca2b43, 0x1ba571e6662fb55a, 0xefb8fcd93781eac2,
        0x51d7d49f383146b0, 0x57ef73d556393e75, 0xe479c3930a677d85, 0x4d7c1c811045b85d,
        0xf68215c7561e0f8c, 0x3ef53d89be41e927, 0x859e9ec726a30a6d, 0xeb9696ffc335452a,
        0x64a3c30ebac0ddac, 0xf519c5d476eec37a, 0x34cd21ff80124751, 0x64a8f43da3a45c34,
        0xf710b02d97f0fcae, 0xd3f6778efdc3b678, 0x211a3a96eb448447, 0xb09091ddcbfb588f,
        0x29f447dd08195bc5, 0xdd4c337890d03033, 0x45d84a857e7d18d7, 0x2170cfd32a993f9c,
        0xe9c9a964824e1d7f, 0x0c6675c708611b15, 0x7db504e25fab54aa, 0x74caeeab126aee21,
        0x8b27416c26a1a8a0, 0x86f6c860b658c03c, 0xfa9d83a9b12bc235, 0x4ebf577813e778e6,
        0xa6cb9ad324f16fa2, 0x15378c576fcff7d9, 0x668e0d117afeeaa1, 0x5ee5f5f69e4dd41b,
        0x459a896dd421f36f, 0x3959e3968b21bceb, 0x39b1e053afa688e3, 0xee0e425a154560f0,
        0x228a740066c7950c, 0x27dbabeedf07b190, 0x319158dba71a8916, 0xcc8bc96067ff1110,
        0xe36a5fc025fa68f0, 0x990a3cc514ae31d6, 0x8d197f4e5fc58bf4, 0x0d80fe98358fe8b0,
        0x61bbb44639eba4e6, 0x653cd2ee6abf1c67, 0xa89b805458cd3586, 0x2bc4a9ef02a63128,
        0xc28981a98591e346, 0x01795eca75417a6b, 0x8416b5f000e18e4a, 0xfb3fa71cf970817e,
        0x6ab1d71297491139, 0x0003fd16ada5a99c, 0xfd2aa80f81d90df8, 0xd687c821f6d9d80c,
        0xa50124aa5de15fd0, 0xaa94f06ebc130c3b, 0x4d0ed04b6d379647, 0xe87a78b7047e35d5,
        0x6303958550ea38be, 0x3baed256975e06d8, 0x1a0d0147cbc497f0, 0xfa57f8a97b022138,
        0x8164b77f7863d781, 0xe4372d2ed276c08c, 0xc0cd340fb87c412b, 0xde99ea37d3bb7432,
        0x894131d11bcf765b, 0x0994dd11f4d5bffa, 0x2ce57b66a1a5b815, 0x01ca59294971162e,
        0xdcebdedc66a2d33a, 0xbc8e9a15ada6c3f4, 0xf85c70ec931d9639, 0x52a05eef21fb291b,
        0x8b1030f6bd394477, 0xce6573e9fc8497df, 0x88ffb2405af4a2c0, 0x5ffd0f385d9478e7,
        0xc61fbbe610bba62f, 0xde39db01d85dca30, 0x33c28b02229ad33e, 0xa0e3d8942dfe1007,
        0xc47d3f3c15750ae4, 0xf9ee695d60620c27, 0x17c0801e6e8e43fb, 0x590a00a5915d9e1c,
        0x1c21ef95c3158a18, 0xc8d9030962d42d82, 0x7df5d2314b287a83, 0xd3b89bd0bb8476ba,
        0x4602c441728a0c4b, 0x49c48099c1f5b601, 0x410cd2054878d8a3, 0x5b1bba802e110249,
        0x6058b90f47f54663, 0x0459fd46632cf9c8, 0x562a0d6ee16847e0, 0x3f5cdfe6787b6641,
        0x2d00ef6e54dd4e37, 0x1c8a2f33d2ee62ff, 0xb802942d114fff43, 0xd3414c0bb05612e4,
        0x9e6f66bd774c584b, 0x769b4c26063a2995, 0x23de54dff0e61d4b, 0xf6e874c5a7a1f8e3,
        0xa79c291b980fee37, 0x73ab8aa140681621, 0x0037febb43b520a5, 0xb72012c9a1dbb436,
        0x0be4e931207001f1, 0xe2a6dd9c18a5fb22, 0x3a7603cafa4cd8f2, 0x742168099ab4aef1,
        0xf420ce062cf4cbff, 0x8e96dd56dbdccc7b, 0xed73a163bd8234c1, 0x951dada28bff3082,
        0x781bfe701336f055, 0x01b5e44c309ae25a, 0x4879d90dbb2b6735, 0x307c48616e0862d6,
        0x7f110eca3da9738a, 0x846fb3c93e834249, 0xa94218ae2862ff38, 0xc5bb9f1d56ab6039,
        0x1646b0842f9631b8, 0xfd9bc8940924cf58, 0x2b2bcef4f95ff321, 0x058f818763184ff4,
        0x8da01f9e45c5d736, 0xa62ea556f7eacca3, 0xc7aa4df4d65e8ec2, 0xee0a1f50c0f28e72,
        0xc5dcd769a519de21, 0x9cd2a2f2f18effee, 0x4e26bef61ca19094, 0x10d3e24ae4b68e38,
        0x49040009e5aab897, 0x1f4535f867abaf7a, 0x1959dd349cdf9e20, 0x13f141a1dae35eda,
        0xc471624c4ed8621a, 0x49d01dc2e6fab58b, 0x1e5a6b5272e4f34c, 0x600d0b5a0e7df109,
        0x959f776badcf9482, 0xb35d438cd70c9258, 0xd3904d62136b1941, 0x5ae2a6ab49b90eff,
        0xa7ee1ad82be23ae9, 0x7975a5f3cb883ceb, 0xb2eaaaf6b4f19fce, 0xe09eb52837413953,
        0xc3366f885a000a9c, 0x1b0e3aeef68473f1, 0x2748fd98b2800646, 0x5ac4eadb78da8016,
        0x0a5f6771afefebe5, 0xc741250c74f296bb, 0xf6044e4b34c26d14, 0x726d87bbe5f6794e,
        0x9ea5daf3d60f66be, 0x60c8bcb8e31e8d63, 0x5efdef7b8ce544f5, 0x084e5f05927fad1a,
        0x2611bba49ecb449a, 0xcea238f4039e279f, 0x547dd09f44a165e1, 0x05650fd8deb42398,
        0xd9f1800619960cc6, 0xc0bae4fd271ada5c, 0xbe67a2cf653e2c0b, 0x8c75f7b3556a0b46,
        0x31399d9d88616b18, 0x13c975868aca0cd8, 0x8b04d5ff7ec750ef, 0xca81ee99a39c2f13,
        0x9f96a2fcb2b0c86a, 0xd1abdc0b43f83748, 0xe1a2c0b972eb45dd, 0x4e74f1f0701708ad,
        0xb5729a74d70a0dfc, 0xb72160f20f61b55b, 0x8f7e031a590156e0, 0xd444fb86e70741bd,
        0xbd701fc65b68c01e, 0x7890761e75f6770a, 0x1b0f919b5ce08047, 0xf9027e24e4d2ab7f,
        0xef5b3aa8849388df, 0xfa2a4debaaa317e2, 0x65da11c9b8409952, 0x2a223421d134bfc3,
        0x025de05c7484e0c1, 0x37b4e2307c746025, 0xbab6b3bba5d82ede, 0x2baac62c70d8df1a,
        0xa692b6a019322c69, 0x9601c1421808ab42, 0xc513f66b0b841b9a, 0x5289120aee2d8a40,
        0xfdb23ac1ce75b4d3, 0x80706daba47dd948, 0xa4d0d839f34627e0, 0xd25563a662f0b26c,
        0x8005f67f0950a4c6, 0xd16d79406d449f51, 0x81eefbe6b64fa831, 0xc904985a47fde3dd,
        0x00557ffee741ceb3, 0x1bc2b1e7a5e7a4b1, 0x5932b75328a43bd1, 0x74b4cb1e2df4fe51,
        0x1f312d044daa1fcf, 0xf6f5cf0fdcded5a1, 0x7caabfb01a045f6a, 0x952b705cd8ba3471,
        0x146623e3ef8778bd, 0xa78329bbd320720d, 0xf118378673a1dbef, 0xc29787801809f79f,
        0x45c97ab2a5b7c2ca, 0x29b9cacf990dbefa, 0x5ebe87277df61b90, 0x97d7358823aecad2,
        0x743c58a58aca724f, 0xea1604d1ce410061, 0xf531c71870e870c1, 0x999bd581438e241f,
        0xb1e0b341ec5a0667, 0xbfc5cfb9732fb38e, 0x998780651c2d5471, 0xbad3e0851c44de73,
        0xb0823f410ce98896, 0xf567cae8c46f189d, 0xc07a1ed150301f52, 0xe4c6f46c5b7608a4,
        0x3dac9f55238c626e, 0x3c2bb26e7c323c52, 0xe1867f9b1c1ced05, 0xa8336e4286a97827,
        0x42765dd9abeb7335, 0x71cac4a60f5ce74b, 0x417e355d902b5ca9, 0xa6333cd1dd2134f2,
        0x89da37f39f50c1a3, 0xbef61953e7bbc3f2, 0x28428354f42bbc53, 0x1138a886fea1abe2,
        0xd23f3e8fcc48f38d, 0x1187920e203c78fd, 0x9a3ac37a2baf46cd, 0x3d67ad7177a9e364,
        0x60536422e58cd383, 0xe51edccc79608da5, 0x143a2218eb67eb9c, 0x1560dbed23120320,
        0x62f4c66c6858b504, 0xb4291e37a8e14253, 0x7a11b25d7b088314, 0xcf65d297f49110f8,
        0x454add5b154fca13, 0x05d110f70480ad18, 0xe25507bdb9b41001, 0x33836b98425b7da8,
        0x7a43d904f2b70e1b, 0x670ae5bcc059242b, 0xa5cecad3f00057cc, 0x80014b171b9dde18,
        0xdfc3b3e593a2a33e, 0x3fb6cf8ed20a95e6, 0x4983b84a2aa209aa, 0x15597a84cb89816a,
        0x8b69d3f6353d7898, 0x38d257f8ef92f629, 0x551d895eacb35572, 0x0306ed1107fcb6ed,
        0x6782f84344f9c7d7, 0x25554fb1d3eb810b, 0x6d1b7f40b1449e6a, 0xcaa81ade86a79c09,
        0x184ba0b1f0773fdc, 0x385e521bdca54cad, 0xecc31bd27567ed3a, 0x39d2dbcee3f8c0de,
        0x6d547af985139ca4, 0x5065d818fc35bdf7, 0xa82a4de46b5e5a39, 0x47f4f5b909ca351c,
        0x1f63840644e38446, 0x55e8cfee3d7f7a98, 0x4b9a5f1b4d92071d, 0x0c917602faa4fab8,
        0x336de76d6cddb6c3, 0x99f5a33c82fa05d8, 0xb2cabfad39b311db, 0x5369135f1c27f3c2,
        0xf2bc612e1377df6f, 0xd183cb27a5535334, 0xf98b2b60f5ea954f, 0xb36abf6838fce20f,
        0x0213fca765574274, 0xa3688caee38319bf, 0x87ffd0fbdac2f8c1, 0xb75aff99b6489555,
        0x7c223bb745b7e044, 0xb8539affd46717ad, 0xa8f55aaad5128812, 0xeea276cf04665f7c,
        0x6e063297cd8e6c1c, 0x96734d7a1bf138a1, 0x1cbed33c5c5b791e, 0x4695397d62b79c4f,
        0x6e2557ebf8b9bb65, 0x9b06c3a96b26281f, 0x76b7a03a8964cc68, 0xc579e70c1f7f487d,
        0xb079d911f43ea3a0, 0xadcc68fa8cd4b960, 0x8919ff25e53508e4, 0x37243c9576a3de9c,
        0x754b85d6d6dc5f93, 0x2bfc9eaa2a2b666c, 0x501a3891c2c636ac, 0x041dbb019a45e16a,
        0xd2281cf04935eba2, 0x5f7e0721ef6a7f33, 0xd77fee9494f49f7c, 0x5bd418f3b00c64e1,
        0xdc09e995f94fa56f, 0x3a29bc73cf5f9308, 0x22f32ccec5d97b18, 0x9fcf8f817da49b36,
        0x9c3c815e3c1d0e42, 0x0b10a596bbeeccb1, 0x2077719838d6a8d6, 0x8ac8b027b9dfeb9e,
        0x6b4d80d345cfa492, 0x090af73a79fd1eb0, 0x3f7a8a461a6fdfbe, 0x564ebe2e502f5b30,
        0xb12ea2bfe19e2681, 0x3df7536ba596c7c6, 0x24ae41da12d22c82, 0xc08eed3d7e0e7b2a,
        0xe1d115efaecd8d63, 0x478ce06f5c5b8d60, 0x775210df0ceb3873, 0x7fb4b5fc064d3ba9,
        0x6db218dea29d71cb, 0xeb8e9e1ba551dc04, 0xc916b0bafb9d296c, 0xd742ef4b57dc5e3b,
        0x06314bb092ef6bb0, 0x49efc316ebc64102, 0xbe767cf260cc48b6, 0xda0520d295080657,
        0x9668b5b365a18f95, 0x274dc74169c42686, 0x0aed63d94b61a7eb, 0x14bc04f8a7fc74ac,
        0x1c07bdedc0b0e71c, 0xcbf133f7e53c530c, 0xfa6da95d7af6c499, 0xb5a8e657bf6c21e1,
        0xa3560244827aa853, 0xe04b44b44c88726a, 0xc9ebe42008b3cdca, 0x005b2338e565435c,
        0xce3f92451794e144, 0xeb65c589b99661d9, 0x4826b9343c14cb79, 0x527257fcae74c17a,
        0x17eb6ec1181d0271, 0xdaa6186c08c25135, 0x175716454cfc5562, 0x11aaf588003130ee,
        0x29ceb4b6a3dafc8f, 0x3fe3dccda98215e1, 0x5aed8c6d4d3e1a40, 0x7fefc8942a7e6bd0,
    ],
    [
        0x2cb91662a45cfd31, 0xe32748869ae7540f, 0x2c1f7d4c43e90ebd, 0xb8a414d2151ffc08,
        0xe8b388f2ee5e579c, 0x99421b429984c4c2, 0x4728cbdb5cbf7df2, 0x79447ef9dfa782a4,
        0xd80e7fdcf95e30d9, 0xeb74554d8c124dff, 0xf9e7a5a481a0500f, 0xf20e163b22f37d65,
        0xbe3aacda4b7b4e21, 0x92321ee26881e64f, 0x5f9b128a86450cc0, 0xee16abd049c879a5,
        0xf5c1000e002bec95, 0x63cea36c29b526a9, 0xe4da7e48fe3551b4, 0xf35d5e32bee0d434,
        0x12726e246bd5b0ab, 0x20a19834aaf6619e, 0xafa1f62a5b62a3a5, 0x4b795e1d161e13e7,
        0x4bfe6aeb03519f9f, 0x6521c92f88d94f69, 0xedb58542266f7e93, 0x10edbf393b6cd199,
        0x04da4d09273731c2, 0x9992ce1a0f7d8d12, 0xb9ba5f913b04622e, 0xf8ea9359d93f6e1a,
        0xb19ea17a08268482, 0xee5a99e815f2f638, 0x6d8e40f8022b62a9, 0x26bee75ad74472a4,
        0xa77c3ad2d382756d, 0xe346b5aa97923d14, 0x6be86c0c7caf702a, 0xf9ff58678c673c89,
        0xc2f0bf3f2431dc01, 0x2174c736757b418f, 0xa43bdec14fe75d33, 0x671a3dd728be2d62,
        0x93e8f58a5d0bc87c, 0x5255e91b65061472, 0x5aa8c8b24b10c402, 0x4d906a2e916ef527,
        0x71eca8e797118df2, 0xe836d537f41ec05d, 0x6d9d3793f9f0d6e6, 0xcd6abab76e412a6a,
        0x907b5b02dc0ab9d5, 0x3ef9bb815b9e88ef, 0xa4b7228166fea635, 0xb08337b31f6e396c,
        0xa9dea222ee0933a3, 0x1eebe3e918949935, 0x3945e39de3fcbf71, 0xde3b885ca11b03cd,
        0x305836fadc04773c, 0xdf86b254c02e49c1, 0x315b32b1a0a2e52c, 0xe31575c2a2c539e4,
        0x09dd56d316f65cfe, 0xd73866316131e921, 0x58b781071fc72b07, 0xaa79acf0740d6b55,
        0x31cc9373991c03d4, 0x1a3bce27d35c7bbd, 0xed274fdf6764329e, 0x6dadc8e174cd9500,
        0xecf5041c0a3a3616, 0x781a8c4d21be0be0, 0x92db27d5bd2e03e7, 0x70fd00c832cf180a,
        0xad9829fe66b56729, 0xaccab5c85267bdd3, 0x88f76293c8ec07e6, 0x844874a7a47ac42e,
        0x2ba2f18cf63528c2, 0xcdb316139d03f3db, 0xe6891cc9ad9b3827, 0x9651f3d90b536161,
        0x9e4414678242fe07, 0x633b94e8691a538e, 0xbded10e6a9ace9c5, 0x0f9abc20907e7069,
        0x248e19a0dab4c075, 0x3950e9e87b52da8d, 0x9a1b80575ea02852, 0xe947922375644d6a,
        0x1d4a61fe23c05518, 0xa7c46a610e5e4542, 0x24265f73477d420a, 0x729005d43d41c118,
        0x145911961c37e5d1, 0xb95b008d13979ab6, 0x4a6bbabf90b5cd33, 0xbf7c4ea02eb6f0d6,
        0xc0eaa9de0fa55315, 0xa8549f619e0bd9c4, 0x2188e83c736f6dac, 0x4925a046099c7bae,
        0x478f797dc2cfb315, 0xd904ba433661d54d, 0x5b067dfb66ae5d4f, 0x06f2f4c2050897ff,
        0xaa4d313eb2b29b4b, 0x6ef98d2d5bdbb257, 0x2e79f595473af61d, 0xadeb94d0293dc085,
        0x2cd48f703ac9536b, 0x01eaf207221b0c32, 0x02fc3ddbb1c06b19, 0x82399139b4c58b05,
        0x5617fb7f4ab23b78, 0xb85263183a8e51f2, 0x55f5c27f22f248a8, 0x6166b21e49a782f3,
        0x2538bd434b26049e, 0xde8deaa9ba092037, 0x123b082c9c89ab61, 0x46ef07558df5d64e,
        0x66324504b3c4873c, 0x6bb53867b56d308a, 0xe7e50b2d3bbcb61d, 0x0bac5dcda756daf9,
        0x983e005d14f3de51, 0x2e3d4fd8f2a360c8, 0xda8503e1af94f402, 0xeeab0104cdf472ab,
        0x53eed518567bfa7c, 0xe51ae6f63563b09e, 0xc2af1a07642d199a, 0x0574020edc38f762,
        0x50b93b8b03043fa6, 0xfaacc154e3510068, 0x3dcce4f682899e3c, 0xff1a97d20b17244e,
        0x78965cefd541cc1a, 0x0c1f87ea5927647b, 0x0762f293179702b8, 0xee3f8a203c9c2326,
        0x8102f6c8cdcec15a, 0xa3891096d57cca8e, 0xb266733f6b37b99f, 0x42634cc972cb370c,
        0x4b52e276de2bea52, 0xea1a898592cdf395, 0x9d03e061bf6e7fb2, 0xfb3be61854522fe7,
        0x83ee803d69429f29, 0xadb817008ee64a88, 0x1963c6f25beb3fbd, 0x36cfba92d6e8cc36,
        0x201098a30d5206e5, 0x3fcc0647057802ba, 0x5da6ddb00d44cb89, 0x4c2934107cb641af,
        0xe0e12d2e7640df9c, 0x7fd03105acfcca6a, 0x53481e6bffa89bb2, 0x689a5de5608bea48,
        0xe68d0a51b1df90e3, 0x78e59d6b40113a60, 0x40b5ed2559ba2af9, 0x0b3bf59adbb1e1b6,
        0x6559f59c3b3ae0c5, 0x0281f91263218ecb, 0x84581814464c8239, 0xd92bdab6b7c4587d,
        0x3e175dec01b2096f, 0x0d1d1ab1c74c7b2c, 0x96153360ce360f37, 0x03a078011491da3e,
        0x9ffd991d89fb4d72, 0x1d6a0bb672f8c904, 0x8ff8679394d9abec, 0xdf416966a3b55538,
        0x7ae8ff03e8f449cd, 0x2e47cb7ff8d744ac, 0x3ced14830959cd01, 0x1ac6198b8ec9b974,
        0x18741acabdcafae2, 0xd43cf4ef93609411, 0xc7477f770f9f3c37, 0x112a49d6bf3f085d,
        0x5d878c1f55b130de, 0x771dde4b73f29561, 0x8a55cc0e5e5c6e11, 0xe917cecf91f55a12,
        0xb9dc05b0210f64fc, 0xb20a59b63d9d41e0, 0xfbb724b759f244b0, 0x5014a8c1a3aa5f1d,
        0x267e282d67f985ed, 0x8e67853b8d9c9fbf, 0x5d66565917a50e7e, 0x17596d7ee2ee7a14,
        0xa31a2aa4ae262ad6, 0x16655d65d6238265, 0x861f1797f39a39c7, 0x9a5a141bacedb33a,
        0x414bfea77d17631e, 0x0093d07e162c6d86, 0xb56961024910006d, 0x99a12054deaed33b,
        0xab7effcdbb13d14a, 0x646418a9a14a8ffc, 0xfccce911fd5d1219, 0xa7764026406b3457,
        0x3a76b6b410422c2c, 0xa3a01c574349b971, 0x60c564a84b87177a, 0x9e2d0f371938134e,
        0xdbbe31e28190ce56, 0x8ccbfa3cf73994fe, 0xf41833551ad52473, 0xa37b1d91fe00d80a,
        0xd9a7ad4e06430c82, 0xa78f73d8c7dccbe2, 0x9f8cb8b6151fc40b, 0x6b2b4671895e8e78,
        0x8fd6bd4d8c941274, 0x6af914a4e4ced1b3, 0xd674b3b322003cc2, 0x5b38389229d513f8,
        0x0994e8c701d1d8a7, 0xe3015fb2ed8a0fc6, 0x76211894ab8018c3, 0xc7e9d9f230ae084f,
        0x7e95aa62e18e74a8, 0x5fd03ba0c50c8eb6, 0x2f10557f503a52ea, 0xd2253a16fd8d5160,
        0x6c5609721cf31783, 0x9ffb9fdf2e9febde, 0x16dffe2266bc29dd, 0x177dceae0b84d2eb,
        0xd49006bcebf781fb, 0xa6ef58b2dfd74641, 0x1f20bba224705873, 0x2b2d546f679882d3,
        0x86d3ff17174e0e22, 0x63d6dc16510aaa7c, 0xcc6469dbb53bdf42, 0xee2e34460bb44d3d,
        0xe0f830f716b0f4bb, 0xe0fdb1e4c2d7b76e, 0x408c0c7a7dbcc077, 0xf6ebf441198ff32f,
        0x96e9b28c8ad49a9b, 0x96eaf73e8bf28e5f, 0xc2bfa998961295ef, 0x1e96433be96f6299,
        0x22790afd885eafe5, 0x72b67eae99082a34, 0x2fcd2186fcd8755a, 0x8c74340533f13425,
        0xc435fd22b4763ea0, 0xca8784da6b2100b5, 0x7babf4bcfaa5eb82, 0x9ef75af79e1f8adc,
        0x1468b370d63cd98d, 0xba46d27b0466134a, 0x175b243069dc8961, 0xf03dd868cc16bbb4,
        0xf55835d9c64dd621, 0x49868df4389c711d, 0x3951291b35fe0505, 0x4814a15b63b333ae,
        0x183e0ba2fcd3787c, 0x10f8906b8075291f, 0xe5a47c4b7262b8cc, 0xec7525bd65d53d80,
        0x71f14945b4e496b9, 0x0d65192a30822c59, 0x36be1308c22c14c1, 0xb8dc7c36d292c6b0,
        0x3ba735d26b787a5d, 0xb780ab12b048e71e, 0xca772e9e6faed2f4, 0x3aadf918deb5ef4a,
        0x56df0d0636f7f462, 0x67f37b94f138dc6d, 0x81b6956b9b9f2613, 0x2a1251d05958fad3,
        0xc3f9f120dcd142b1, 0x8bef3d0fa25f8627, 0xc71a0a85004a2aa6, 0x49fee2c2da457cf9,
        0x4f898bc3a91bfed0, 0xfc56a08f8b43288a, 0x0c1c532ff5b0b048, 0x709823960fa1776f,
        0xf2a94006d3fce912, 0x29626906896a5aea, 0x21c4c180a10fbb90, 0x64f6e4aef1c098b1,
        0x9d41aca273b76f6b, 0x853f3b9f6c50bf24, 0x35536eb11137f9c3, 0x61e5a3c17b691e0c,
        0x688af07fd3e60da1, 0xbb855ceb811bd6cb, 0x74eebc120021b290, 0x17425cbcf9145657,
        0x22cb7f69bf1e9f8d, 0x54da7cdbb40ccc41, 0x2bb2346f1e460645, 0xdb28374035039dd9,
        0x0479ec95902caefa, 0x1d3191a54e34b4bd, 0x6c4d99f53654f98c, 0x581c00d87feae481,
        0xd1a707b876d70429, 0x9b1ee6be06fbb550, 0x4a5ab3bb66e996d1, 0xeec7c71c3700d8fb,
        0xbd5213d37444bdec, 0xfad6aa7d51819470, 0x7407cdee868482b7, 0x2b776b4957eb54d4,
        0xead83837e39b7703, 0xe89a24f798879bba, 0xd3bcfc6799fe4026, 0x5ac5f216a4791da0,
        0xfb89cc65dc07a367, 0x1a3f51b93101e283, 0x93d2a88edc67953e, 0x9b15372da40e44e9,
        0xa0ebf68bef644d93, 0xe68d69aec11e1f37, 0x70f75a5cce8d7056, 0xee9f28a59d923fa0,
        0xae70635e2f4a7fc0, 0x8221d9412c618bf6, 0x5d349cafe656af49, 0xf44a1bcaadcc8b05,
        0xd20f04b0f36dce4f, 0x93a5152da522ae8c, 0xeeda57e89425b6bb, 0xbafbf59cc1e77895,
        0xfa0211851818070c, 0x52879e7be2aeb607, 0x937eddd03cf8fd1f, 0x5bb2ca4dd3893df2,
        0x2c067f3d44c81042, 0x89330885650a9002, 0x37419206ebb917df, 0xb69bc2be78619fe4,
        0x106c49ac78dfe6b0, 0x21bae309f9b2f931, 0x86df9697b5404657, 0x7fc0aee762d523d3,
        0x1c2a3e46ab6025df, 0xcbdb8caecae6c18a, 0x7503aca9e3200521, 0xb2e1b98f624c897b,
        0x7f1b57a2e1bd96ce, 0xab4d3f27e55ee73f, 0x33b191eef79d5e02, 0x005a393911ea7255,
        0xa2454cf55f1d4b12, 0x3d3695946fbd22bd, 0xd636ecade2a6a47a, 0x47d40bd7d172cea3,
        0x5f74aa46619063b7, 0x7b1c8b7105408eab, 0xd859521e35b6c157, 0x3cc6735fe1b8247e,
        0x12f0abbe0b0c62f0, 0xdecbe5fd402b2ad9, 0x4d8573c69d7535e7, 0x7c708f9529f5c692,
        0x1f858937dcda9e64, 0x106d92f19ccc4c26, 0x276a007a05299a1a, 0xf2b43827cfde5b2f,
        0xaff33f93aa402e90, 0xe09fec7797d4a4e8, 0x22c42e4f4886a421, 0x9a1d2965dc9b4444,
        0x289dca928987300a, 0x7c299b9aa2d1d007, 0x4d62f578349be3d5, 0x3a0cc4ac548a723b,
        0x806daad5094ba5b4, 0xe901b45ce286b039, 0xaa5d2648607d9f41, 0x1583226b7b7b5d80,
        0x6cf1df6b4d47b59f, 0xc08298a9096ec237, 0xa40f370492d794d6, 0xd5ba643615ac397f,
        0x01d15340c8a40021, 0xa40e7aa8b4207246, 0x4541beaf2eb13369, 0x5b0cd25033b1b1ef,
        0x473ed37f760bbc96, 0x1dc1ae7a8a5da4df, 0x7a3a4a287e04e48e, 0x12ef8427da112ddc,
        0xa0e57d8d2b310e90, 0x5b09a7a30e1aa4bc, 0x5ddaae1436af38c2, 0x7d0132cd1b6c55f3,
        0x9b653000a3683cee, 0xef04b1ed3237554f, 0xb3255376c1d49dac, 0xa776000e6569ab8b,
        0x01193bc9c453d28e, 0xf661caf268aa24c7, 0xdb9cfc162bb7a709, 0xd74df34cd911d318,
        0x243c8e93cfd9b542, 0xe85dee2b2195a839, 0x407727f4c74e80cc, 0x5bf447deb636a46e,
        0x37bd5c378b269271, 0xcb147c445f4423db, 0xb9325d85dfa7eb2d, 0xa9a6407d6c3534d5,
        0x55028ad0a3d7b828, 0x3db1c43dedfd1991, 0x6dee3881b499478e, 0x2ed4eb92dab542e5,
        0xa561519665b35eea, 0x4d281126bcdad9a9, 0x83cdf214b499f840, 0x7d0646ad8ca76bce,
        0x44fcbeb3a40d313f, 0xd24d709e4187fb7f, 0x2201aa41431aea79, 0x13e50c5657edd04c,
        0xc8315981537f658c, 0x14c6f15c34c8f225, 0x988cddd549cd2d68, 0x8914cce098ddb466,
        0xe75b4f7b515c4089, 0x1a404ef629a2a6d1, 0xabd4b8ea23e2d7d0, 0x3ceb7f8f9b7358f2,
        0x733d6256edbfb28f, 0x93bdcd60d5aa84fd, 0xa0cdd3644850e0a4, 0x3d2c6970cf74f19c,
        0x69fb2ac2b3960b76, 0xc1f841e08100bed0, 0x4a012544dcc6202c, 0x65aae6f3c79fe63a,
        0xa738a84745842672, 0x23dedbb8f50384bd, 0x7405c071967efac1, 0x59f3f053a21c26cc,
        0xab451a991b6350fe, 0x46248627c69cfb5b, 0x607019f03526eeaf, 0xb1a886d4c821f6b7,
        0x00ae640d42b99aa0, 0x4ae8d126ce832395, 0x7060a749a643316c, 0x3ccc39b98346d928,
        0xf0ea0acf8a8efb39, 0xb66b96e38a8cc8bc, 0x7c39a68e80ea7d03, 0x796a65b320a0f78f,
        0x59eb773732ec8f38, 0xdd2588f38d3b97a9, 0x1695464becdc2911, 0xefa02ed9f609f087,
        0xfc3c7907e9517ba2, 0xaeba6a96e1d5a5ef, 0x549c2119e670d3cc, 0x4fb2308f1cf64905,
        0xcdf5af5d45ce6e64, 0x47732bcdbf73c435, 0x7a800aa3bacd3fb7, 0x5def837815102704,
        0x6758062d0a2c5fe6, 0x46ad0ad9a3baeb25, 0x39c13926950a7b08, 0xda3efd988194766e,
        0x4e07f5ca8b97f0af, 0xa6aaa6c910f361c1, 0xe6c25a002edbb68f, 0x5e22319ba4dc3f63,
        0xadae7e924f09fe92, 0x498cc31aa3f9c340, 0x27dfef0bbfbd56fa, 0x26920bc150c5e874,
        0xf241e51670af4fde, 0x99eb62b6dc46ddc1, 0x3642c77cd247f18c, 0x90b030a9c64d635f,
        0x0ed5908b326faaa4, 0x283d647d8b30a9be, 0x79c1caaf90da1a75, 0xc87231371b85b7cb,
        0x43da2770c467f2b4, 0x6d8b2342c6559496, 0x785c4a70b9835538, 0x8bb1b9f1d446f3cf,
        0xb78afde42eb91b51, 0x3338bc9cc598f481, 0xe05a5f3a86017545, 0x95761fbd55fe7117,
        0x9e421a7ca75d2342, 0x3fa8d3a0d457ab9c, 0x7682d38dc64ed713, 0x3b444c48ac5e0d6b,
    ],
    [
        0xe563cefd8ccb854c, 0xc695469d0728a2eb, 0x5a75f961531313d7, 0x3ef1faf0aa1256bd,
        0xd45bcf4c5960ef1c, 0xf0426d804d974a81, 0x2c07df0fc6af7d44, 0x5190fb0feecc2f22,
        0xd696e1d95bf363dc, 0xf01aff98d74c5a65, 0x1603ca645475f2d2, 0x2b5f2f7706c30b28,
        0x8e7191784644e173, 0x8aa830ae224d4f21, 0xc69750d5bd21c524, 0x6f7b1a6a32f9eaf5,
        0xa5a7cbfa68a1a680, 0xaf1ff35fe294926a, 0xedf451738bfe9773, 0x79cdc61021147dbc,
        0xc362ccee8b8e0c49, 0x485195f239a5c4d3, 0x28dbcb7750743bb6, 0x55231d00aea9bd3c,
        0x5671a6e95cfb3c8c, 0x17d5821d0a793534, 0x9f53372f4c5dd59e, 0x7a29011f3e09f46a,
        0xedf48adc113841a5, 0x21eedee71005a953, 0x58b966add7e18b57, 0xca1fc13ba12fdf41,
        0xff77551fc0798101, 0x9e71252dbbedc29b, 0x1e36ccc69efb0473, 0x2f956519babeec88,
        0x2a9118005b304005, 0x98f822ef4445e8c2, 0x71a58b0c759dba20, 0xa312a3c0dc85bba1,
        0x975e2f3c30a199cf, 0x6bd41981cf3c1c4d, 0x887f3a2a0b6603ea, 0x6735bd1c798d9993,
        0x23e6003fa5522a75, 0xc0c919c383a068a3, 0x29526afdf73db19d, 0x98e05abf53e86ae1,
        0xa2fc251c1bf69873, 0x6835a3150ef0447d, 0xf6886bcda71dee29, 0x11e50ad77958e3dc,
        0x80ff984a6ff3efcf, 0xd4d6e358f7ff5804, 0xa375fb70077e8821, 0x789ea49bd2ee8d68,
        0x674939e19085b360, 0x5a5e803feb8a1e84, 0x17768527e4667322, 0x5cdda529ccdcd600,
        0x61388e0323aef997, 0x42a138ec328565e9, 0x71e153afa7fe2735, 0x23fc5ddf1510a406,
        0xf5452cdb65b0c45a, 0x7b46244ec433d11c, 0x85a1f4db66dcdc9e, 0x0f2245459e4631de,
        0xbabcb16d8c6979d5, 0x61304f0f97a74be6, 0x310b251fb15a9188, 0x3df210f3698d8e60,
        0x6a1bcfc08251449c, 0x979931041951a915, 0x57190e0e0a336508, 0x0931841dbc9823d3,
        0x4c2a11ecf88b43ff, 0xda6c122e9f7845dc, 0xbf3b485722a6c4ae, 0x2c440f94acfc13dc,
        0xf131d77942041db7, 0x2703bab8a2103168, 0xd187fa01471b8b9c, 0x738ef6809939a3cc,
        0x8adfc0d2b533f3dd, 0xf42e000ea26241ec, 0x13d12f8ef9cf84b9, 0x07e107c9fdf3f015,
        0x040aabd20ea29721, 0x9e094e54ce0ade43, 0x3d0ceaeaca5ce09f, 0x9c36865e0e578a5b,
        0xc21b67e1e5c482f0, 0xc178ddf175ba987e, 0x7ff0b61e77c94715, 0xd798c04b8224f5d2,
        0x8baa01d626946bda, 0x3aa70bb6cad1455e, 0x3e64b034dfdc0cec, 0xb0350c52455baf52,
        0xd091be7ad9dece69, 0xc578360e1383ece8, 0x34d5f06c679c0b40, 0x3328fa8e431ca797,
        0x831e04a9014a165a, 0xd6f9239ca0dedafd, 0xe015426c76b2673f, 0x006d8b25d5da393c,
        0xc6ef3f1b84afa749, 0x8139559dfbde282f, 0x7c02c9056a029a40, 0xc1dc4d903850830d,
        0x099b7b532aec1574, 0xb2b9c7868068e7c7, 0x934b0455da44ffae, 0x4dab4e16b57234ab,
        0x7af53f3056b77b47, 0xa832b3028f5e0bf6, 0xea35e04bc17eb9bc, 0x89552b460a84a920,
        0xae67dea9b589a287, 0x5b4eef3547243604, 0x09fdfe4dac83b2ea, 0x37038b38033c4535,
        0x9981f5bf06440ce3, 0xe16b4578b8130d16, 0x000fcee9c307721f, 0x475a78f4c9f0e98d,
        0xb3c787699c37f743, 0x4a8b99baf106c08e, 0xae3026b96460e991, 0x69cb9800de9c2676,
        0x8e3be750ae9090d6, 0x2346ff98a9486531, 0xd42661ced3e15c2f, 0xcce57d3af5f3ce72,
        0xa1b82dffa5fa53e9, 0x8b211915723096a6, 0x2203b703cea7d558, 0xd16fb08badfa6fdb,
        0xb13644e67d3ddbb3, 0xb0c61ffcfb240793, 0xcefcbb98e2883a1d, 0x2cf39bc566b18adf,
        0xbefee3acd85d377f, 0xc645560a658a52bf, 0x34506c3578fa54df, 0xd66d6ce68101bd8b,
        0xe02ab03ba109572e, 0x08c64f90cd05368d, 0x39e3d3afc8f7d408, 0xf535947dec9d8fce,
        0x24e92ca6eac8da18, 0xa127fb6dc42cb4d2, 0xf3ff88e87c0337fb, 0x8746ea5171d805f4,
        0xe43b0138684a540b, 0xd0d577f6c4ba43f6, 0x0e295883f06add82, 0x22f4594e1dd5872b,
        0xd0087e47100525f2, 0xa406fb7a42a1778c, 0x13bfd326028bb238, 0xa7fb548a48d5abf1,
        0x147e93daf6cabc89, 0xa5372c1201869457, 0xdc0e7e5fceed2f9f, 0x5438bf1c68fd219a,
        0x1e1d3c53aa126719, 0x46882526ae55b97f, 0x59dc553027edfe8a, 0x1d675bdb49e6d0d2,
        0x9a723f75146d10a3, 0x4e2b5d139fec9a99, 0xa778460fde5a48ba, 0xbd7fd806e06bc33c,
        0x9ff981567c53296a, 0xe63527140e646af5, 0xda7621c4016d6039, 0x6ccfe2c6e0916210,
        0x1f1c33b09320cae6, 0x4b3d73f7453d9a22, 0x941d21ba7c4dd076, 0xe629d5de1a4ea456,
        0xc563856f2bfdcfc9, 0x0ee71ee0393d6cdf, 0xd422125d04a0d5f5, 0xd6a1d639391c1d7d,
        0x8d7631dac67d0edd, 0x0628ff2245ba251a, 0x3b189004805b56e3, 0xb6d681c4e72843a0,
        0x34e9d19295d444ab, 0x7989794f63422083, 0x7d467bef17ecf7cc, 0x2601981695782b24,
        0x9481d261ac0eb728, 0xa1242ccaf53d781a, 0x5198fd901b4d8313, 0xb2fb6223312b8fc6,
        0x6c56b5beeef05378, 0xf85910c4a769ef1f, 0xf16eba4dfb5503e3, 0x8892bae2d6fd441e,
        0xd4746056c3d8703c, 0xf4df6842ce8580e9, 0x6ffef743ae13f22b, 0xb9939fe89f01533f,
        0x6d0ed6b73b62dfa2, 0x5ff3ccd9e466fd97, 0x73cab9fdc2767589, 0x65612acb09323caa,
        0x06efacdcfd3066ec, 0x46fbd381857cdbdb, 0x5824117feba591d4, 0x8b64ed8abba349a7,
        0xc34d3d79a31170c3, 0x43865428db12dc99, 0xb4fa4593faa022c7, 0xf024de85e12d3024,
        0xc4f2782ba5d4b266, 0x9486f46c4d6f24fd, 0x7c3c04fd65c7f5a4, 0xdee12df51bddfda8,
        0x521d62544c0de308, 0xd94f9646f0897613, 0x171e9d96209edd95, 0xcb81bd0cca5e2d9f,
        0x7eac201844935824, 0x1c6ed00d787d6644, 0xaaa5996e48808edb, 0x98812c6f85837d74,
        0xc42661e01bf707a0, 0x8e6fa99481b628d4, 0xea9eacf368d9ebf3, 0x331d9a108607f99e,
        0x5fa99480119106b0, 0x53bad712fbefa7e6, 0xda05993e77c105f6, 0x1ac330d6acf1286f,
        0xaf3f8d08a2dc60de, 0xc5554a91442baaa0, 0xf36c41bf3ad35493, 0x4d5dbc3b80f49d40,
        0xce1f1c4826fc4ad4, 0xb4dae072df938705, 0x916c0a593d0c3d8a, 0xddfefe8722ddd405,
        0x62fa9a80313b685d, 0xde4d9deac3a9c6db, 0x02e8ff962b86b310, 0x4f6489e431d4ce6b,
        0xc6ea593fc0a93516, 0x016a84ca210e22e8, 0x2f1435aa7f504d9b, 0xa90af2a44a00c5a6,
        0x2934794652ff26b7, 0x82218867d4fc5696, 0x8a0dbf6705118708, 0x945c172ca66c0ccd,
        0x46b436cd0d6a7d46, 0x482f03df97355f15, 0x7a6062cdda8368a1, 0x7994700571867c84,
        0xaf9efe4cc0e74dc3, 0x30cefb9e8ddc0eb4, 0x62e2ce3db7344a98, 0x3fc646302e576983,
        0x6611395f55dca667, 0x94372aaa0a990dc7, 0x6316ba605defea01, 0x031c4553383a6450,
        0xef683f0f1baacfbd, 0xe62fdc0154867f14, 0xf8f76c656726f305, 0x6874b37210310a29,
        0xf136a8ba3fa28700, 0xf711df8b4c7e16ae, 0xd8ef7c9a1bead2d6, 0xdd5881fd049301df,
        0xf81dd15fb061e416, 0xb6b1b34759e3bfc1, 0x575240a7d65ea54d, 0xc397b46c15a7f6be,
        0x184e240c397f3664, 0x3d33c574c5421895, 0x4ea9266060223be5, 0x96473ff0ed83420a,
        0x4a0f45eb9bbce049, 0x5256370ff57f66c8, 0xda25838007b22424, 0xda5ecd39a6d17b19,
        0xd4aaf2be32f5de9b, 0x77fb08cd86531814, 0x8ca96ff0bcdd88e5, 0xe88c4913f8c96d49,
        0x295b0738aa2da264, 0xbdb314dddc0aa158, 0x40301c8ecc3e07ca, 0x4ff8ab749dc4cd07,
        0x01d500dbc0013dba, 0xa6befe0d2860bd4f, 0xb6d599f9c9ddece9, 0x28ce2303e1588c1e,
        0x18dd295c59b72d6c, 0x671febc56d0ba1ea, 0x9063135ee5f6ab8d, 0x2b8ff368ef1b2b1b,
        0x9cac662bad350ee5, 0x6bff7b2e92401620, 0x2c1304e315b2cf47, 0x3d56f6971cdb9e7b,
        0x36ff33d97ad501d9, 0x0c14c37664466b53, 0xf033628dd7ee97af, 0xd1b82f175754e08c,
        0x064a06e0ee841b38, 0x8ba14bb494592d43, 0xd9aa1ebaa083bd72, 0x95fc6d45a34f4412,
        0x70d6ecfa9b94d642, 0x6b021f283c79cdb8, 0x54bfa368f3b2f1c9, 0x6c25f635b440719a,
        0x6eb1a6a31f976501, 0xc607ed33bd6058cf, 0x1a905d115e9c2542, 0x141cd92cbe139ebe,
        0x3d9a7ae9e5c1f1a0, 0xd5957eefbb09607b, 0xebf5b2439a4efa7a, 0x08c60fb607b05529,
        0x6359671227c91d73, 0x42968cd35ce1aa24, 0x0a89e6a74ba63810, 0x16d96ad3f0102087,
        0xc586c4f2c976cebd, 0x435ef9509cdba39e, 0xea45012d8de332b2, 0x3cf30f0a5ee9ecfa,
        0x48a1e987308cceb9, 0x95637e46e4edea42, 0x9003a559caf53dd7, 0xefac9c43e6490fd0,
        0xff7be70e85f80af0, 0x0b0076a91ec5b810, 0xa4ec0a39adb92fb0, 0x612db6fb1b0580d7,
        0x968e89e70d8788f8, 0x5be6cb4c842e52ab, 0x5d843a5789262bfd, 0xf41cf1c78daa27f4,
        0x5ee33cbea6c6b96e, 0x95891e354432f679, 0xe31e97f6d41b8023, 0xd2588bab508e5149,
        0xe302bc41d9396cd1, 0xeff6ee2663a70db8, 0x91b02d67c37c2b46, 0xcc62e79cc2442aca,
        0xb45f5ed865d4ba34, 0x3534367812ba2a17, 0xd8cb9b5b0f57a2e6, 0xa87d4ae164ea3192,
        0x10b30ada548edbe0, 0x6ea0ae150011bd15, 0x9f9df6680cfc33ca, 0xdc25e54b1b7e9c19,
        0x165c9063e75f44fc, 0x44f9ef7b0cf649ed, 0xb0e8eaba47bdc0a8, 0xf2afb326752fea2a,
        0xf4c72fffe27a7dbd, 0x96b8494e9bfa61cd, 0x9233ebf3d0c955c0, 0x95a861b0a8bf715b,
        0xf8bab4dd730ab349, 0xc2ce964289e3b45e, 0x778a846c7d72e0e6, 0x7df268ee75db7bd6,
        0x0d1d4f57521ce83f, 0xffee4308785274a5, 0xf1145036720ccf3d, 0x60f9c0e2e7f5d703,
        0x7d201858fdaffb8f, 0x5ff7bbeab26d5049, 0xa9fc9d5cf2c0e4e0, 0x917d5dbaa49f681a,
        0x5984ffa2dbe1064f, 0x03bc8cd468aefe28, 0x1d752b70dae37cee, 0x415efc9e5de7944e,
        0x34b385772823c3e5, 0x2e139c9c2355b499, 0x962124551c914064, 0x32b283b17afc1d4d,
        0x4ca68a87ea2ff489, 0x177c5ff04df363a5, 0x7f9af1de15ab0e11, 0xcbd6fa95501f1360,
        0x3a4120dc3b163339, 0x2a7bbffd92828acc, 0xb746f40d87970e03, 0x4e1026ad8cfe1df8,
        0xe8ee7c0368253387, 0x2df8b206ad171465, 0x33b2365c174cb9a9, 0xd990285273740a78,
        0xa9faba4bade45cd4, 0xbf2dd17aa6864982, 0xc20e737c79429eb1, 0xe5342f76f736d087,
        0xec3eba1a377e18bf, 0x3809690d9debc9ff, 0x35bf4aef36da11c0, 0x2772cd56aecefd8a,
        0x9a6af4b7d6a22345, 0x75d6423abcb6b3d3, 0xdd4ed3907269cecd, 0x1a30cff5c3e23cfd,
        0x3c2794cf2c069d1a, 0x980be15380976119, 0xbe4f394895526319, 0x4ef3c7d4046655f1,
        0x27fb5a129f3938fa, 0xac018e8332e2e431, 0x542e6b5260ec5864, 0xdde0d92e41196b5b,
        0xb2eb046eb04ffc6b, 0xc1ef34632bce3779, 0xdcd8ef4fa0aa67a8, 0x11e51e494b7149f2,
        0x9046ee7c427a0c55, 0x4aa0cd610c1dac6b, 0x625306164c737cf3, 0xffa48ea70246e36b,
        0xd766f986703184e5, 0x4bcda341b74dc1e5, 0x77acdd072b2fc935, 0xb01248d67896c993,
        0x18fd59f3c46ba69d, 0x6aa8012f54a2de21, 0x06fde613882f63d6, 0x1e4a1202ad14dcfa,
        0xf7a0e0c370df2613, 0x01fc21ab01354b75, 0x95b29e274084fa32, 0x2bc0642bad110925,
        0xc288719d45dcdc71, 0xb78611caa7261628, 0xa8c2ad115e93611b, 0xc0cad047b2dc5df4,
        0xe6575fb1f809dc20, 0xa6e7de5a851307e4, 0x3ed8c1a516bf84ca, 0xae9ee91945821058,
        0x69f297dc41fbabac, 0x5749531dc1789013, 0xd2c5e31cbe5bbc07, 0xc9c56965a2f0e37f,
        0x2864a816337adc1d, 0xa8c3f73768c4546f, 0x6247ca15385911c9, 0x667d3ea065f96c08,
        0x9ac9b950c79e5c1f, 0xe7538fdbfe763981, 0xb2b2279a1ba8fbd6, 0x75a153f7d5989af5,
        0x47febbe8c2b463c7, 0xa31ea8954bccedce, 0x1149d080adb33afb, 0x6eef3724942c326c,
        0x42a6ab05505fddd4, 0x0c45947f9d523c87, 0xcea931d169addec4, 0x652768538c1e844c,
        0x4d03cbbc36002652, 0xe4b1c692a84a5b6f, 0xa6692f14af859eb1, 0xd5ddaf184902b47f,
        0x0d0d35e738b1b406, 0x79d9ea012367483f, 0x810fb3c812d5cec6, 0x2dd398b4f89f8712,
        0xf9197eaaa9d433ae, 0x534a09bdd69d60c5, 0x4315c7f289be56d1, 0x04a362eddadab1ea,
        0x25fba614cb26f86c, 0x43a64e35e65cc63e, 0xb8791dd617f6affe, 0xa15ad47bb2e010eb,
        0xa57088f364f25ee2, 0xc09ecb305d742dbb, 0x31277019c3f4d178, 0x551b8391b5c7fa25,
        0x317ea24dc79ffdb3, 0x865f3c236e393e68, 0x8046423e64f6b6cb, 0x3a4bae9b589b7444,
        0x36d3efd57c5b241e, 0x383fe3d2c19c393d, 0xd71b6a7ac04276bf, 0x3c4e3d9801a3085c,
        0x81e08665e65278e9, 0x519759c129b6bc2c, 0x9e258b0d8d434f14, 0x7ab92ce2ccfb9b77,
        0x1506cccb84c071ab, 0xc37ce45f7e424674, 0x8862d21301f94f0c, 0x79abfc10be24a4d5,
    ],
];
