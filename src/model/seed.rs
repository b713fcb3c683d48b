use crate::model::question::NewQuestion;

/// The built-in question set, loaded once at start-up in this order.
pub fn questions() -> Vec<NewQuestion> {
    vec![
        NewQuestion::new("What is the capital of France?")
            .choice("Paris", true)
            .choice("London", false)
            .choice("Rome", false)
            .choice("Berlin", false),
        NewQuestion::new("Which languages are used in web development?")
            .choice("JavaScript", true)
            .choice("Python", false)
            .choice("Java", false)
            .choice("HTML", true),
        NewQuestion::new("Which of the following are programming languages?")
            .choice("C++", true)
            .choice("Spanish", false)
            .choice("Ruby", true)
            .choice("HTML", false),
        NewQuestion::new("Which planets are in the Solar System?")
            .with_image("solar_system.webp")
            .choice("Earth", true)
            .choice("Mars", true)
            .choice("Pluto", true)
            .choice("Proxima Centauri", false),
        NewQuestion::new("What are the primary colors?")
            .choice("Red", true)
            .choice("Blue", true)
            .choice("Yellow", true)
            .choice("Green", false),
        NewQuestion::new("What is 2 + 2?")
            .choice("3", false)
            .choice("4", true)
            .choice("5", false)
            .choice("6", false),
        NewQuestion::new("Which of these are fruits?")
            .with_image("fruits.jpeg")
            .choice("Apple", true)
            .choice("Tomato", true)
            .choice("Carrot", false)
            .choice("Banana", true),
        NewQuestion::new("Which countries are in Europe?")
            .choice("Germany", true)
            .choice("Brazil", false)
            .choice("Italy", true)
            .choice("Japan", false),
        NewQuestion::new("Which are valid CSS properties?")
            .choice("color", true)
            .choice("margin", true)
            .choice("padding", true)
            .choice("hover", false),
        NewQuestion::new("Which of the following are JavaScript frameworks?")
            .choice("React", true)
            .choice("Angular", true)
            .choice("Django", false)
            .choice("Vue", true),
    ]
}
