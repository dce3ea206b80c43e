//! Irregular verb and plural forms mapped to their base form.
//!
//! Stemming cannot relate "ran" to "run" or "children" to "child", so these
//! are looked up before the stemmer runs.

use std::collections::HashMap;
use std::sync::OnceLock;

static IRREGULARS: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

const TABLE: &[(&str, &[&str])] = &[
    ("be", &["was", "were", "been", "being", "am", "is", "are"]),
    ("have", &["had", "has", "having"]),
    ("do", &["did", "does", "doing", "done"]),
    ("go", &["went", "goes", "going", "gone"]),
    ("run", &["ran", "running", "runs"]),
    ("say", &["said", "says", "saying"]),
    ("make", &["made", "makes", "making"]),
    ("take", &["took", "takes", "taking", "taken"]),
    ("come", &["came", "comes", "coming"]),
    ("see", &["saw", "sees", "seeing", "seen"]),
    ("know", &["knew", "knows", "knowing", "known"]),
    ("get", &["got", "gets", "getting", "gotten"]),
    ("give", &["gave", "gives", "giving", "given"]),
    ("find", &["found", "finds", "finding"]),
    ("think", &["thought", "thinks", "thinking"]),
    ("tell", &["told", "tells", "telling"]),
    ("become", &["became", "becomes", "becoming"]),
    ("leave", &["left", "leaves", "leaving"]),
    ("feel", &["felt", "feels", "feeling"]),
    ("bring", &["brought", "brings", "bringing"]),
    ("begin", &["began", "begins", "beginning", "begun"]),
    ("keep", &["kept", "keeps", "keeping"]),
    ("hold", &["held", "holds", "holding"]),
    ("write", &["wrote", "writes", "writing", "written"]),
    ("stand", &["stood", "stands", "standing"]),
    ("hear", &["heard", "hears", "hearing"]),
    ("mean", &["meant", "means", "meaning"]),
    ("meet", &["met", "meets", "meeting"]),
    ("pay", &["paid", "pays", "paying"]),
    ("sit", &["sat", "sits", "sitting"]),
    ("speak", &["spoke", "speaks", "speaking", "spoken"]),
    ("lead", &["led", "leads", "leading"]),
    ("read", &["reads", "reading"]),
    ("grow", &["grew", "grows", "growing", "grown"]),
    ("lose", &["lost", "loses", "losing"]),
    ("fall", &["fell", "falls", "falling", "fallen"]),
    ("send", &["sent", "sends", "sending"]),
    ("build", &["built", "builds", "building"]),
    ("understand", &["understood", "understands", "understanding"]),
    ("draw", &["drawn", "drew", "draws", "drawing"]),
    ("break", &["broke", "breaks", "breaking", "broken"]),
    ("spend", &["spent", "spends", "spending"]),
    ("catch", &["caught", "catches", "catching"]),
    ("buy", &["bought", "buys", "buying"]),
    ("fight", &["fought", "fights", "fighting"]),
    ("teach", &["taught", "teaches", "teaching"]),
    ("sell", &["sold", "sells", "selling"]),
    ("seek", &["sought", "seeks", "seeking"]),
    ("throw", &["threw", "throws", "throwing", "thrown"]),
    ("show", &["showed", "shows", "showing", "shown"]),
    ("choose", &["chose", "chooses", "choosing", "chosen"]),
    ("sleep", &["slept", "sleeps", "sleeping"]),
    ("wear", &["worn", "wore", "wears", "wearing"]),
    ("win", &["won", "wins", "winning"]),
    ("child", &["children"]),
    ("man", &["men"]),
    ("woman", &["women"]),
];

/// Look up the base form of an irregular (lowercase) word
pub fn base_form(word: &str) -> Option<&'static str> {
    IRREGULARS
        .get_or_init(|| {
            TABLE
                .iter()
                .flat_map(|(base, forms)| forms.iter().map(move |f| (*f, *base)))
                .collect()
        })
        .get(word)
        .copied()
}
