//! Named colors, sorted byte-wise by name for binary search.
//!
//! Names are lowercase without spaces and use the `gray` spelling only;
//! lookups normalize their input the same way before searching.

use super::Rgba;

pub(super) static NAMED_COLORS: &[(&str, Rgba)] = &[
    ("aliceblue", Rgba::opaque(240, 248, 255)),
    ("antiquewhite", Rgba::opaque(250, 235, 215)),
    ("aqua", Rgba::opaque(0, 255, 255)),
    ("aquamarine", Rgba::opaque(127, 255, 212)),
    ("azure", Rgba::opaque(240, 255, 255)),
    ("beige", Rgba::opaque(245, 245, 220)),
    ("bisque", Rgba::opaque(255, 228, 196)),
    ("black", Rgba::opaque(0, 0, 0)),
    ("blanchedalmond", Rgba::opaque(255, 235, 205)),
    ("blue", Rgba::opaque(0, 0, 255)),
    ("blueviolet", Rgba::opaque(138, 43, 226)),
    ("brown", Rgba::opaque(165, 42, 42)),
    ("burlywood", Rgba::opaque(222, 184, 135)),
    ("cadetblue", Rgba::opaque(95, 158, 160)),
    ("chartreuse", Rgba::opaque(127, 255, 0)),
    ("chocolate", Rgba::opaque(210, 105, 30)),
    ("coral", Rgba::opaque(255, 127, 80)),
    ("cornflowerblue", Rgba::opaque(100, 149, 237)),
    ("cornsilk", Rgba::opaque(255, 248, 220)),
    ("crimson", Rgba::opaque(220, 20, 60)),
    ("cyan", Rgba::opaque(0, 255, 255)),
    ("darkblue", Rgba::opaque(0, 0, 139)),
    ("darkcyan", Rgba::opaque(0, 139, 139)),
    ("darkgoldenrod", Rgba::opaque(184, 134, 11)),
    ("darkgray", Rgba::opaque(169, 169, 169)),
    ("darkgreen", Rgba::opaque(0, 100, 0)),
    ("darkkhaki", Rgba::opaque(189, 183, 107)),
    ("darkmagenta", Rgba::opaque(139, 0, 139)),
    ("darkolivegreen", Rgba::opaque(85, 107, 47)),
    ("darkorange", Rgba::opaque(255, 140, 0)),
    ("darkorchid", Rgba::opaque(153, 50, 204)),
    ("darkred", Rgba::opaque(139, 0, 0)),
    ("darksalmon", Rgba::opaque(233, 150, 122)),
    ("darkseagreen", Rgba::opaque(143, 188, 143)),
    ("darkslateblue", Rgba::opaque(72, 61, 139)),
    ("darkslategray", Rgba::opaque(47, 79, 79)),
    ("darkturquoise", Rgba::opaque(0, 206, 209)),
    ("darkviolet", Rgba::opaque(148, 0, 211)),
    ("deeppink", Rgba::opaque(255, 20, 147)),
    ("deepskyblue", Rgba::opaque(0, 191, 255)),
    ("dimgray", Rgba::opaque(105, 105, 105)),
    ("dodgerblue", Rgba::opaque(30, 144, 255)),
    ("firebrick", Rgba::opaque(178, 34, 34)),
    ("floralwhite", Rgba::opaque(255, 250, 240)),
    ("forestgreen", Rgba::opaque(34, 139, 34)),
    ("fuchsia", Rgba::opaque(255, 0, 255)),
    ("gainsboro", Rgba::opaque(220, 220, 220)),
    ("ghostwhite", Rgba::opaque(248, 248, 255)),
    ("gold", Rgba::opaque(255, 215, 0)),
    ("goldenrod", Rgba::opaque(218, 165, 32)),
    ("gray", Rgba::opaque(190, 190, 190)),
    ("gray0", Rgba::opaque(0, 0, 0)),
    ("gray1", Rgba::opaque(3, 3, 3)),
    ("gray10", Rgba::opaque(26, 26, 26)),
    ("gray100", Rgba::opaque(255, 255, 255)),
    ("gray11", Rgba::opaque(28, 28, 28)),
    ("gray12", Rgba::opaque(31, 31, 31)),
    ("gray13", Rgba::opaque(33, 33, 33)),
    ("gray14", Rgba::opaque(36, 36, 36)),
    ("gray15", Rgba::opaque(38, 38, 38)),
    ("gray16", Rgba::opaque(41, 41, 41)),
    ("gray17", Rgba::opaque(43, 43, 43)),
    ("gray18", Rgba::opaque(46, 46, 46)),
    ("gray19", Rgba::opaque(48, 48, 48)),
    ("gray2", Rgba::opaque(5, 5, 5)),
    ("gray20", Rgba::opaque(51, 51, 51)),
    ("gray21", Rgba::opaque(54, 54, 54)),
    ("gray22", Rgba::opaque(56, 56, 56)),
    ("gray23", Rgba::opaque(59, 59, 59)),
    ("gray24", Rgba::opaque(61, 61, 61)),
    ("gray25", Rgba::opaque(64, 64, 64)),
    ("gray26", Rgba::opaque(66, 66, 66)),
    ("gray27", Rgba::opaque(69, 69, 69)),
    ("gray28", Rgba::opaque(71, 71, 71)),
    ("gray29", Rgba::opaque(74, 74, 74)),
    ("gray3", Rgba::opaque(8, 8, 8)),
    ("gray30", Rgba::opaque(76, 76, 76)),
    ("gray31", Rgba::opaque(79, 79, 79)),
    ("gray32", Rgba::opaque(82, 82, 82)),
    ("gray33", Rgba::opaque(84, 84, 84)),
    ("gray34", Rgba::opaque(87, 87, 87)),
    ("gray35", Rgba::opaque(89, 89, 89)),
    ("gray36", Rgba::opaque(92, 92, 92)),
    ("gray37", Rgba::opaque(94, 94, 94)),
    ("gray38", Rgba::opaque(97, 97, 97)),
    ("gray39", Rgba::opaque(99, 99, 99)),
    ("gray4", Rgba::opaque(10, 10, 10)),
    ("gray40", Rgba::opaque(102, 102, 102)),
    ("gray41", Rgba::opaque(105, 105, 105)),
    ("gray42", Rgba::opaque(107, 107, 107)),
    ("gray43", Rgba::opaque(110, 110, 110)),
    ("gray44", Rgba::opaque(112, 112, 112)),
    ("gray45", Rgba::opaque(115, 115, 115)),
    ("gray46", Rgba::opaque(117, 117, 117)),
    ("gray47", Rgba::opaque(120, 120, 120)),
    ("gray48", Rgba::opaque(122, 122, 122)),
    ("gray49", Rgba::opaque(125, 125, 125)),
    ("gray5", Rgba::opaque(13, 13, 13)),
    ("gray50", Rgba::opaque(128, 128, 128)),
    ("gray51", Rgba::opaque(130, 130, 130)),
    ("gray52", Rgba::opaque(133, 133, 133)),
    ("gray53", Rgba::opaque(135, 135, 135)),
    ("gray54", Rgba::opaque(138, 138, 138)),
    ("gray55", Rgba::opaque(140, 140, 140)),
    ("gray56", Rgba::opaque(143, 143, 143)),
    ("gray57", Rgba::opaque(145, 145, 145)),
    ("gray58", Rgba::opaque(148, 148, 148)),
    ("gray59", Rgba::opaque(150, 150, 150)),
    ("gray6", Rgba::opaque(15, 15, 15)),
    ("gray60", Rgba::opaque(153, 153, 153)),
    ("gray61", Rgba::opaque(156, 156, 156)),
    ("gray62", Rgba::opaque(158, 158, 158)),
    ("gray63", Rgba::opaque(161, 161, 161)),
    ("gray64", Rgba::opaque(163, 163, 163)),
    ("gray65", Rgba::opaque(166, 166, 166)),
    ("gray66", Rgba::opaque(168, 168, 168)),
    ("gray67", Rgba::opaque(171, 171, 171)),
    ("gray68", Rgba::opaque(173, 173, 173)),
    ("gray69", Rgba::opaque(176, 176, 176)),
    ("gray7", Rgba::opaque(18, 18, 18)),
    ("gray70", Rgba::opaque(178, 178, 178)),
    ("gray71", Rgba::opaque(181, 181, 181)),
    ("gray72", Rgba::opaque(184, 184, 184)),
    ("gray73", Rgba::opaque(186, 186, 186)),
    ("gray74", Rgba::opaque(189, 189, 189)),
    ("gray75", Rgba::opaque(191, 191, 191)),
    ("gray76", Rgba::opaque(194, 194, 194)),
    ("gray77", Rgba::opaque(196, 196, 196)),
    ("gray78", Rgba::opaque(199, 199, 199)),
    ("gray79", Rgba::opaque(201, 201, 201)),
    ("gray8", Rgba::opaque(20, 20, 20)),
    ("gray80", Rgba::opaque(204, 204, 204)),
    ("gray81", Rgba::opaque(207, 207, 207)),
    ("gray82", Rgba::opaque(209, 209, 209)),
    ("gray83", Rgba::opaque(212, 212, 212)),
    ("gray84", Rgba::opaque(214, 214, 214)),
    ("gray85", Rgba::opaque(217, 217, 217)),
    ("gray86", Rgba::opaque(219, 219, 219)),
    ("gray87", Rgba::opaque(222, 222, 222)),
    ("gray88", Rgba::opaque(224, 224, 224)),
    ("gray89", Rgba::opaque(227, 227, 227)),
    ("gray9", Rgba::opaque(23, 23, 23)),
    ("gray90", Rgba::opaque(230, 230, 230)),
    ("gray91", Rgba::opaque(232, 232, 232)),
    ("gray92", Rgba::opaque(235, 235, 235)),
    ("gray93", Rgba::opaque(237, 237, 237)),
    ("gray94", Rgba::opaque(240, 240, 240)),
    ("gray95", Rgba::opaque(242, 242, 242)),
    ("gray96", Rgba::opaque(245, 245, 245)),
    ("gray97", Rgba::opaque(247, 247, 247)),
    ("gray98", Rgba::opaque(250, 250, 250)),
    ("gray99", Rgba::opaque(252, 252, 252)),
    ("green", Rgba::opaque(0, 255, 0)),
    ("greenyellow", Rgba::opaque(173, 255, 47)),
    ("honeydew", Rgba::opaque(240, 255, 240)),
    ("hotpink", Rgba::opaque(255, 105, 180)),
    ("indianred", Rgba::opaque(205, 92, 92)),
    ("indigo", Rgba::opaque(75, 0, 130)),
    ("ivory", Rgba::opaque(255, 255, 240)),
    ("khaki", Rgba::opaque(240, 230, 140)),
    ("lavender", Rgba::opaque(230, 230, 250)),
    ("lavenderblush", Rgba::opaque(255, 240, 245)),
    ("lawngreen", Rgba::opaque(124, 252, 0)),
    ("lemonchiffon", Rgba::opaque(255, 250, 205)),
    ("lightblue", Rgba::opaque(173, 216, 230)),
    ("lightcoral", Rgba::opaque(240, 128, 128)),
    ("lightcyan", Rgba::opaque(224, 255, 255)),
    ("lightgoldenrod", Rgba::opaque(238, 221, 130)),
    ("lightgoldenrodyellow", Rgba::opaque(250, 250, 210)),
    ("lightgray", Rgba::opaque(211, 211, 211)),
    ("lightgreen", Rgba::opaque(144, 238, 144)),
    ("lightpink", Rgba::opaque(255, 182, 193)),
    ("lightsalmon", Rgba::opaque(255, 160, 122)),
    ("lightseagreen", Rgba::opaque(32, 178, 170)),
    ("lightskyblue", Rgba::opaque(135, 206, 250)),
    ("lightslateblue", Rgba::opaque(132, 112, 255)),
    ("lightslategray", Rgba::opaque(119, 136, 153)),
    ("lightsteelblue", Rgba::opaque(176, 196, 222)),
    ("lightyellow", Rgba::opaque(255, 255, 224)),
    ("lime", Rgba::opaque(0, 255, 0)),
    ("limegreen", Rgba::opaque(50, 205, 50)),
    ("linen", Rgba::opaque(250, 240, 230)),
    ("magenta", Rgba::opaque(255, 0, 255)),
    ("maroon", Rgba::opaque(176, 48, 96)),
    ("mediumaquamarine", Rgba::opaque(102, 205, 170)),
    ("mediumblue", Rgba::opaque(0, 0, 205)),
    ("mediumorchid", Rgba::opaque(186, 85, 211)),
    ("mediumpurple", Rgba::opaque(147, 112, 219)),
    ("mediumseagreen", Rgba::opaque(60, 179, 113)),
    ("mediumslateblue", Rgba::opaque(123, 104, 238)),
    ("mediumspringgreen", Rgba::opaque(0, 250, 154)),
    ("mediumturquoise", Rgba::opaque(72, 209, 204)),
    ("mediumvioletred", Rgba::opaque(199, 21, 133)),
    ("midnightblue", Rgba::opaque(25, 25, 112)),
    ("mintcream", Rgba::opaque(245, 255, 250)),
    ("mistyrose", Rgba::opaque(255, 228, 225)),
    ("moccasin", Rgba::opaque(255, 228, 181)),
    ("navajowhite", Rgba::opaque(255, 222, 173)),
    ("navy", Rgba::opaque(0, 0, 128)),
    ("navyblue", Rgba::opaque(0, 0, 128)),
    ("oldlace", Rgba::opaque(253, 245, 230)),
    ("olive", Rgba::opaque(128, 128, 0)),
    ("olivedrab", Rgba::opaque(107, 142, 35)),
    ("orange", Rgba::opaque(255, 165, 0)),
    ("orangered", Rgba::opaque(255, 69, 0)),
    ("orchid", Rgba::opaque(218, 112, 214)),
    ("palegoldenrod", Rgba::opaque(238, 232, 170)),
    ("palegreen", Rgba::opaque(152, 251, 152)),
    ("paleturquoise", Rgba::opaque(175, 238, 238)),
    ("palevioletred", Rgba::opaque(219, 112, 147)),
    ("papayawhip", Rgba::opaque(255, 239, 213)),
    ("peachpuff", Rgba::opaque(255, 218, 185)),
    ("peru", Rgba::opaque(205, 133, 63)),
    ("pink", Rgba::opaque(255, 192, 203)),
    ("plum", Rgba::opaque(221, 160, 221)),
    ("powderblue", Rgba::opaque(176, 224, 230)),
    ("purple", Rgba::opaque(160, 32, 240)),
    ("rebeccapurple", Rgba::opaque(102, 51, 153)),
    ("red", Rgba::opaque(255, 0, 0)),
    ("rosybrown", Rgba::opaque(188, 143, 143)),
    ("royalblue", Rgba::opaque(65, 105, 225)),
    ("saddlebrown", Rgba::opaque(139, 69, 19)),
    ("salmon", Rgba::opaque(250, 128, 114)),
    ("sandybrown", Rgba::opaque(244, 164, 96)),
    ("seagreen", Rgba::opaque(46, 139, 87)),
    ("seashell", Rgba::opaque(255, 245, 238)),
    ("sienna", Rgba::opaque(160, 82, 45)),
    ("silver", Rgba::opaque(192, 192, 192)),
    ("skyblue", Rgba::opaque(135, 206, 235)),
    ("slateblue", Rgba::opaque(106, 90, 205)),
    ("slategray", Rgba::opaque(112, 128, 144)),
    ("snow", Rgba::opaque(255, 250, 250)),
    ("springgreen", Rgba::opaque(0, 255, 127)),
    ("steelblue", Rgba::opaque(70, 130, 180)),
    ("tan", Rgba::opaque(210, 180, 140)),
    ("teal", Rgba::opaque(0, 128, 128)),
    ("thistle", Rgba::opaque(216, 191, 216)),
    ("tomato", Rgba::opaque(255, 99, 71)),
    ("turquoise", Rgba::opaque(64, 224, 208)),
    ("violet", Rgba::opaque(238, 130, 238)),
    ("violetred", Rgba::opaque(208, 32, 144)),
    ("wheat", Rgba::opaque(245, 222, 179)),
    ("white", Rgba::opaque(255, 255, 255)),
    ("whitesmoke", Rgba::opaque(245, 245, 245)),
    ("yellow", Rgba::opaque(255, 255, 0)),
    ("yellowgreen", Rgba::opaque(154, 205, 50)),
];
