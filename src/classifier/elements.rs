use crate::model::Element;

/// Fixed trigram→element table: 1,2 Metal; 3 Fire; 4,5 Wood; 6 Water; 7,8 Earth.
pub fn trigram_element(trigram: u8) -> Element {
    match trigram {
        1 | 2 => Element::Metal,
        3 => Element::Fire,
        4 | 5 => Element::Wood,
        6 => Element::Water,
        // 7 and 8; trigram numbers outside [1,8] are unrepresentable, the
        // casting wraparound guarantees it.
        _ => Element::Earth,
    }
}

/// True when `a` generates `b` in the classical cycle
/// Wood→Fire→Earth→Metal→Water→Wood.
pub fn generates(a: Element, b: Element) -> bool {
    use Element::*;
    matches!(
        (a, b),
        (Wood, Fire) | (Fire, Earth) | (Earth, Metal) | (Metal, Water) | (Water, Wood)
    )
}

/// True when `a` destroys `b` in the classical cycle
/// Wood→Earth→Water→Fire→Metal→Wood.
pub fn destroys(a: Element, b: Element) -> bool {
    use Element::*;
    matches!(
        (a, b),
        (Wood, Earth) | (Earth, Water) | (Water, Fire) | (Fire, Metal) | (Metal, Wood)
    )
}
