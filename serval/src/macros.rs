// Chained setters for the options every field carries. Expects a
// `options: FieldOptions` member on the implementing type.
macro_rules! options_methods {
    () => {
        /// Read the value from this attribute or key instead of the field name.
        pub fn attr(mut self, attr: impl Into<String>) -> Self {
            self.options.attr = Some(attr.into());
            self
        }

        /// Call the retrieved value before converting it.
        pub fn call(mut self, call: bool) -> Self {
            self.options.call = call;
            self
        }

        /// Write the value under this key instead of the field name.
        pub fn label(mut self, label: impl Into<String>) -> Self {
            self.options.label = Some(label.into());
            self
        }

        pub fn required(mut self, required: bool) -> Self {
            self.options.required = required;
            self
        }

        pub fn optional(self) -> Self {
            self.required(false)
        }
    };
}
