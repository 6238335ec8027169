/// Macro to generate the opcode table, decoded instructions and VM dispatch from handler signatures.
///
/// Each handler is written as `"name" => fn method(&mut self, line [, operand: Type]) { .. }` and must
/// evaluate to a `RuntimeResult`. The literal is the case-sensitive opcode name in source files, the
/// method name is used for the VM handler and (camel-cased) for the `OpCode` and `Instruction` variants.
macro_rules! impl_opcodes {
    // Decode opcode operands from their source token
    (@decode Value, $operand:expr, $opname:expr) => (
        $operand.and_then(crate::frontend::parser::integer).ok_or(ParseErrorKind::InvalidOperand($opname))?
    );
    // Main definition block
    (
        $(
            $( #[ $attr:meta ] )*
            $opname:literal => fn $name:ident ( & mut $self:ident, $line:ident $(, $arg_name:ident : $arg_type:ident )? ) $code:block
        )+
    ) => { paste::paste! {

        /// Instruction table opcodes. Generated from handler signatures defined via the `impl_opcodes!` macro.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum OpCode {
            $(
                $( #[ $attr ] )*
                [<$name:camel>],
            )+
        }

        impl OpCode {
            /// All opcodes in table order.
            pub const ALL: &'static [OpCode] = &[ $( OpCode::[<$name:camel>], )+ ];

            /// Looks up an opcode by its case-sensitive source name.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $opname => Some(OpCode::[<$name:camel>]), )+
                    _ => None,
                }
            }

            /// Source name of the opcode.
            pub fn name(self: Self) -> &'static str {
                match self {
                    $( OpCode::[<$name:camel>] => $opname, )+
                }
            }

            /// Decodes the operand token (if the opcode takes one) into an instruction.
            /// Operand tokens of opcodes that take none are ignored.
            #[allow(unused_variables)]
            pub(crate) fn decode(self: Self, operand: Option<&str>) -> Result<Instruction, ParseErrorKind> {
                Ok(match self {
                    $(
                        OpCode::[<$name:camel>] => Instruction::[<$name:camel>] $( ( impl_opcodes!(@decode $arg_type, operand, $opname) ) )?,
                    )+
                })
            }
        }

        impl Display for OpCode {
            fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.name())
            }
        }

        /// Decoded instructions, carrying their operand. Generated via the `impl_opcodes!` macro.
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum Instruction {
            $(
                $( #[ $attr ] )*
                [<$name:camel>] $( ( $arg_type ) )?,
            )+
        }

        impl Instruction {
            /// The opcode of this instruction.
            pub fn opcode(self: &Self) -> OpCode {
                match self {
                    $( Instruction::[<$name:camel>] { .. } => OpCode::[<$name:camel>], )+
                }
            }
        }

        /// Instruction handlers. Implemented on VM by the `impl_opcodes!` macro.
        impl<W> VM<W> where W: Write {

            $(
                $( #[ $attr ] )*
                #[allow(unused_variables)]
                fn $name($self: &mut Self, $line: LineNumber $(, $arg_name: $arg_type )? ) -> RuntimeResult {
                    $code
                }
            )+

            /// Executes a single decoded instruction originating from the given source line.
            pub(crate) fn exec(self: &mut Self, instruction: Instruction, line: LineNumber) -> RuntimeResult {
                match instruction {
                    $(
                        Instruction::[<$name:camel>] $( ( $arg_name ) )? => self.$name(line $(, $arg_name )? ),
                    )+
                }
            }
        }
    } }
}
