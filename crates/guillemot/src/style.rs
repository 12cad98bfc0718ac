pub fn plumage() -> StyleBuilder {
    StyleBuilder {
        classes: Vec::new(),
    }
}

pub struct StyleBuilder {
    classes: Vec<String>,
}

impl From<StyleBuilder> for String {
    fn from(value: StyleBuilder) -> Self {
        value.classes.join(" ")
    }
}

macro_rules! style_methods {
    ($($method_name:ident : $class_name:expr),*) => {
        $(
            pub fn $method_name(self) -> Self {
                self.class($class_name)
            }
        )*
    }
}

impl StyleBuilder {
    #[inline(always)]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    style_methods! {
        m_0 : "ma0",
        m_1 : "ma1",
        m_2 : "ma2",
        m_3 : "ma3",
        m_4 : "ma4",
        m_5 : "ma5",
        m_6 : "ma6",
        m_7 : "ma7"
    }

    style_methods! {
        mt_0 : "mt0",
        mt_1 : "mt1",
        mt_2 : "mt2",
        mt_3 : "mt3",
        mt_4 : "mt4",
        mt_5 : "mt5",
        mt_6 : "mt6",
        mt_7 : "mt7"
    }

    style_methods! {
        mr_0 : "mr0",
        mr_1 : "mr1",
        mr_2 : "mr2",
        mr_3 : "mr3",
        mr_4 : "mr4",
        mr_5 : "mr5",
        mr_6 : "mr6",
        mr_7 : "mr7"
    }

    style_methods! {
        mb_0 : "mb0",
        mb_1 : "mb1",
        mb_2 : "mb2",
        mb_3 : "mb3",
        mb_4 : "mb4",
        mb_5 : "mb5",
        mb_6 : "mb6",
        mb_7 : "mb7"
    }

    style_methods! {
        ml_0 : "ml0",
        ml_1 : "ml1",
        ml_2 : "ml2",
        ml_3 : "ml3",
        ml_4 : "ml4",
        ml_5 : "ml5",
        ml_6 : "ml6",
        ml_7 : "ml7"
    }

    style_methods! {
        flex : "flex",
        items_center : "items-center"
    }

    style_methods! {
        text_left : "tl",
        text_right : "tr",
        text_center : "tc",
        text_justify : "tj"
    }
}
