use crate::project::{Accent, BoardVariant, LetterStone, TileBoardSpec};

pub(crate) static ZIGZAG: TileBoardSpec = TileBoardSpec {
    letters: &[
        LetterStone::new(1, 2, 'Z'),
        LetterStone::new(1, 3, 'I'),
        LetterStone::new(1, 4, 'G'),
        LetterStone::new(1, 5, 'Z'),
        LetterStone::new(1, 6, 'A'),
        LetterStone::new(1, 7, 'G'),
    ],
    variant: BoardVariant::Wide,
    accent: Accent::Emerald,
    caption: ["FASHION COMMERCE", "UX / BRANDING"],
};

pub(crate) static GMARKET: TileBoardSpec = TileBoardSpec {
    letters: &[
        LetterStone::new(1, 1, 'G'),
        LetterStone::new(1, 2, 'M'),
        LetterStone::new(1, 3, 'A'),
        LetterStone::new(1, 4, 'R'),
        LetterStone::new(1, 5, 'K'),
        LetterStone::new(1, 6, 'E'),
        LetterStone::new(1, 7, 'T'),
        LetterStone::new(2, 2, 'R'),
        LetterStone::new(2, 3, 'A'),
        LetterStone::new(2, 4, 'K'),
        LetterStone::new(2, 5, 'U'),
        LetterStone::new(2, 6, 'T'),
        LetterStone::new(2, 7, 'E'),
        LetterStone::new(2, 8, 'N'),
    ],
    variant: BoardVariant::Narrow,
    accent: Accent::Sky,
    caption: ["GLOBAL MARKETPLACE", "UX / SEO"],
};

pub(crate) static TRAVEL: TileBoardSpec = TileBoardSpec {
    letters: &[
        LetterStone::new(1, 2, 'T'),
        LetterStone::new(1, 3, 'R'),
        LetterStone::new(1, 4, 'A'),
        LetterStone::new(1, 5, 'V'),
        LetterStone::new(1, 6, 'E'),
        LetterStone::new(1, 7, 'L'),
    ],
    variant: BoardVariant::Wide,
    accent: Accent::Amber,
    caption: ["TRAVEL / LIFESTYLE", "BRAND & WEB"],
};
