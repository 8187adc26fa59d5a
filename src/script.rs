//! Mapping from Unicode scripts to OpenType script tags.

use unicode_script::Script;

use crate::tag;

/// OpenType script tags that may serve a Unicode script, ordered newest
/// revision first.
///
/// Script tags are not the same thing as Unicode scripts: a Unicode script
/// can correspond to several tags, typically when the OpenType registry has
/// revised the shaping model for it (e.g. Bengali's `bng2` supersedes
/// `beng`). Scripts without a registered tag fall back to `DFLT`, as do
/// `Common` and `Unknown`. `Inherited` also maps to `DFLT` here; callers
/// that can do better resolve it from surrounding context instead.
///
/// See <https://learn.microsoft.com/en-us/typography/opentype/spec/scripttags>.
pub fn candidate_tags(script: Script) -> &'static [u32] {
    match script {
        Script::Arabic => &const { [tag!(b"arab")] },
        Script::Armenian => &const { [tag!(b"armn")] },
        Script::Avestan => &const { [tag!(b"avst")] },
        Script::Balinese => &const { [tag!(b"bali")] },
        Script::Bamum => &const { [tag!(b"bamu")] },
        Script::Batak => &const { [tag!(b"batk")] },
        Script::Bengali => &const { [tag!(b"bng2"), tag!(b"beng")] },
        Script::Bopomofo => &const { [tag!(b"bopo")] },
        Script::Brahmi => &const { [tag!(b"brah")] },
        Script::Braille => &const { [tag!(b"brai")] },
        Script::Buginese => &const { [tag!(b"bugi")] },
        Script::Buhid => &const { [tag!(b"buhd")] },
        Script::Canadian_Aboriginal => &const { [tag!(b"cans")] },
        Script::Carian => &const { [tag!(b"cari")] },
        Script::Cham => &const { [tag!(b"cham")] },
        Script::Cherokee => &const { [tag!(b"cher")] },
        Script::Coptic => &const { [tag!(b"copt")] },
        // "Sumero-Akkadian Cuneiform" in OpenType
        Script::Cuneiform => &const { [tag!(b"xsux")] },
        Script::Cypriot => &const { [tag!(b"cprt")] },
        Script::Cyrillic => &const { [tag!(b"cyrl")] },
        Script::Deseret => &const { [tag!(b"dsrt")] },
        Script::Devanagari => &const { [tag!(b"dev2"), tag!(b"deva")] },
        Script::Egyptian_Hieroglyphs => &const { [tag!(b"egyp")] },
        Script::Ethiopic => &const { [tag!(b"ethi")] },
        Script::Georgian => &const { [tag!(b"geor")] },
        Script::Glagolitic => &const { [tag!(b"glag")] },
        Script::Gothic => &const { [tag!(b"goth")] },
        Script::Greek => &const { [tag!(b"grek")] },
        Script::Gujarati => &const { [tag!(b"gjr2"), tag!(b"gujr")] },
        Script::Gurmukhi => &const { [tag!(b"gur2"), tag!(b"guru")] },
        // "CJK Ideographic" in OpenType
        Script::Han => &const { [tag!(b"hani")] },
        Script::Hangul => &const { [tag!(b"hang")] },
        Script::Hanunoo => &const { [tag!(b"hano")] },
        Script::Hebrew => &const { [tag!(b"hebr")] },
        Script::Hiragana => &const { [tag::KANA] },
        Script::Imperial_Aramaic => &const { [tag!(b"armi")] },
        Script::Inscriptional_Pahlavi => &const { [tag!(b"phli")] },
        Script::Inscriptional_Parthian => &const { [tag!(b"prti")] },
        Script::Javanese => &const { [tag!(b"java")] },
        Script::Kaithi => &const { [tag!(b"kthi")] },
        Script::Kannada => &const { [tag!(b"knd2"), tag!(b"knda")] },
        Script::Katakana => &const { [tag::KANA] },
        Script::Kayah_Li => &const { [tag!(b"kali")] },
        Script::Kharoshthi => &const { [tag!(b"khar")] },
        Script::Khmer => &const { [tag!(b"khmr")] },
        Script::Lao => &const { [tag!(b"lao ")] },
        Script::Latin => &const { [tag::LATN] },
        Script::Lepcha => &const { [tag!(b"lepc")] },
        Script::Limbu => &const { [tag!(b"limb")] },
        Script::Linear_B => &const { [tag!(b"linb")] },
        Script::Lisu => &const { [tag!(b"lisu")] },
        Script::Lycian => &const { [tag!(b"lyci")] },
        Script::Lydian => &const { [tag!(b"lydi")] },
        Script::Malayalam => &const { [tag!(b"mlm2"), tag!(b"mlym")] },
        Script::Mandaic => &const { [tag!(b"mand")] },
        Script::Meetei_Mayek => &const { [tag!(b"mtei")] },
        Script::Mongolian => &const { [tag!(b"mong")] },
        Script::Myanmar => &const { [tag!(b"mym2"), tag!(b"mymr")] },
        Script::New_Tai_Lue => &const { [tag!(b"talu")] },
        Script::Nko => &const { [tag!(b"nko ")] },
        Script::Ogham => &const { [tag!(b"ogam")] },
        Script::Ol_Chiki => &const { [tag!(b"olck")] },
        Script::Old_Italic => &const { [tag!(b"ital")] },
        Script::Old_Persian => &const { [tag!(b"xpeo")] },
        Script::Old_South_Arabian => &const { [tag!(b"sarb")] },
        Script::Old_Turkic => &const { [tag!(b"orkh")] },
        // "Odia (formerly Oriya)" in OpenType
        Script::Oriya => &const { [tag!(b"ory2"), tag!(b"orya")] },
        Script::Osmanya => &const { [tag!(b"osma")] },
        Script::Phags_Pa => &const { [tag!(b"phag")] },
        Script::Phoenician => &const { [tag!(b"phnx")] },
        Script::Rejang => &const { [tag!(b"rjng")] },
        Script::Runic => &const { [tag!(b"runr")] },
        Script::Samaritan => &const { [tag!(b"samr")] },
        Script::Saurashtra => &const { [tag!(b"saur")] },
        Script::Shavian => &const { [tag!(b"shaw")] },
        Script::Sinhala => &const { [tag!(b"sinh")] },
        Script::Sundanese => &const { [tag!(b"sund")] },
        Script::Syloti_Nagri => &const { [tag!(b"sylo")] },
        Script::Syriac => &const { [tag!(b"syrc")] },
        Script::Tagalog => &const { [tag!(b"tglg")] },
        Script::Tagbanwa => &const { [tag!(b"tagb")] },
        Script::Tai_Le => &const { [tag!(b"tale")] },
        Script::Tai_Tham => &const { [tag!(b"lana")] },
        Script::Tai_Viet => &const { [tag!(b"tavt")] },
        Script::Tamil => &const { [tag!(b"tml2"), tag!(b"taml")] },
        Script::Telugu => &const { [tag!(b"tel2"), tag!(b"telu")] },
        Script::Thaana => &const { [tag!(b"thaa")] },
        Script::Thai => &const { [tag!(b"thai")] },
        Script::Tibetan => &const { [tag!(b"tibt")] },
        Script::Tifinagh => &const { [tag!(b"tfng")] },
        Script::Ugaritic => &const { [tag!(b"ugar")] },
        Script::Vai => &const { [tag!(b"vai ")] },
        Script::Yi => &const { [tag!(b"yi  ")] },
        _ => &const { [tag::DFLT] },
    }
}
