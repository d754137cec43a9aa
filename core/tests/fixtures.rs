use lorem_core::{Length, TextGenerator, DEFAULT_SEED};

/// Two paragraphs produced by `paragraphs(1.2, 0.5)` for the default seed
const PARAGRAPHS_FIXTURE: &str = concat!(
    "Dictum eu justo tincidunt nostra facilisis litora quisque nunc, arcu fermentum lacinia nibh dapibus volutpat nulla conubia curae, auctor pellentesque proin rhoncus sociosqu nascetur nisi. Sociosqu vulputate penatibus porta placerat felis enim aenean mollis eleifend, convallis erat platea varius taciti viverra fusce lacus condimentum pharetra, potenti auctor et dictum neque eu efficitur habitasse. Adipiscing sem mattis efficitur suscipit eget curabitur ligula montes, auctor eu condimentum bibendum penatibus quis leo, purus tortor torquent non lacus proin enim. Rutrum a velit class imperdiet gravida taciti auctor, curae pharetra magnis convallis suspendisse interdum at diam, vel est nec quisque habitasse senectus. Lacinia consequat aenean lobortis amet nec in a orci consectetur, etiam scelerisque aliquam purus curae rhoncus ad tortor viverra, gravida ex suspendisse efficitur sociosqu enim eu libero. Sed fringilla nec elementum penatibus finibus sodales curae, mus risus laoreet aliquet imperdiet augue. Habitasse justo sem per vestibulum nam volutpat est euismod maximus, himenaeos posuere arcu ullamcorper risus elementum ut lacinia, efficitur auctor dis habitant accumsan praesent ac molestie.",
    "\n\n",
    "Adipiscing blandit vitae posuere faucibus fames est maximus dictum condimentum mus, odio penatibus dignissim volutpat risus ultricies tortor egestas et senectus ante, eu tellus aenean rutrum consectetur ex morbi scelerisque consequat. Bibendum non hac proin ex iaculis condimentum donec netus aenean dignissim amet, taciti ullamcorper litora varius sollicitudin nulla libero imperdiet leo odio massa, curae habitant primis natoque ultrices commodo tempus mollis interdum felis. Vestibulum malesuada id lacus fermentum fringilla cras mollis inceptos augue tempor venenatis in, pretium ullamcorper viverra velit est eleifend platea eu feugiat vivamus. Leo augue nibh sociosqu volutpat praesent quam nisi sollicitudin habitasse, convallis ex lacinia himenaeos cursus turpis nascetur maecenas, porta fames commodo porttitor malesuada vulputate sem imperdiet. Nisl himenaeos massa libero risus taciti potenti vel facilisis posuere tortor molestie, lacinia fames mus quam pharetra pretium lorem bibendum venenatis nisi, nunc scelerisque ultricies tristique elementum integer conubia vitae sapien arcu.",
);

fn generator() -> TextGenerator {
    TextGenerator::new(Some(DEFAULT_SEED))
}

#[test]
fn test_paragraphs_fixture() {
    let text = generator().paragraphs(
        (1.2, 0.5),
        Length::PARAGRAPH_SENTENCES,
        Length::SENTENCE_WORDS,
        false,
    );
    assert_eq!(text, PARAGRAPHS_FIXTURE);
}

#[test]
fn test_paragraphs_vec_matches_joined() {
    let paragraphs = generator().paragraphs_vec(
        (1.2, 0.5),
        Length::PARAGRAPH_SENTENCES,
        Length::SENTENCE_WORDS,
        false,
    );
    assert_eq!(paragraphs.len(), 2);
    assert_eq!(paragraphs.join("\n\n"), PARAGRAPHS_FIXTURE);
}

#[test]
fn test_long_run_length() {
    let text = generator().paragraphs(
        200.0,
        Length::PARAGRAPH_SENTENCES,
        Length::SENTENCE_WORDS,
        false,
    );
    assert_eq!(text.len(), 209103);
}

#[test]
fn test_same_seed_same_text() {
    let run = || {
        let mut gen = TextGenerator::new(Some(2024));
        let words = gen.words((30.0, 10.0), true);
        let sentences = gen.sentences(4.0, Length::SENTENCE_WORDS, false);
        let paragraphs = gen.paragraphs(
            3.0,
            Length::PARAGRAPH_SENTENCES,
            Length::SENTENCE_WORDS,
            false,
        );
        (words, sentences, paragraphs)
    };
    assert_eq!(run(), run());
}
